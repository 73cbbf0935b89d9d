//! Configuration tables rendered with comfy-table

use std::path::PathBuf;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};

use crate::cli::config::{BuildConfig, ConfigBuilder};
use crate::utils::{print_section, OutputSink};

/// Placeholder shown for absent values
pub const NONE_LABEL: &str = "(none)";

fn fmt_path(value: &Option<PathBuf>) -> String {
    value
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| NONE_LABEL.to_string())
}

fn fmt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NONE_LABEL.to_string())
}

fn fmt_list(values: &[String]) -> String {
    if values.is_empty() {
        NONE_LABEL.to_string()
    } else {
        values.join(", ")
    }
}

fn fmt_bool(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn fmt_mode(onefile: Option<bool>) -> String {
    match onefile {
        Some(true) => "onefile".to_string(),
        Some(false) => "onedir".to_string(),
        None => NONE_LABEL.to_string(),
    }
}

/// Rows for a configuration that is still being collected
pub fn builder_rows(state: &ConfigBuilder) -> Vec<(&'static str, String)> {
    vec![
        ("Script", state.input_file.display().to_string()),
        ("Output dir", fmt_path(&state.output)),
        ("Mode", fmt_mode(state.onefile)),
        (
            "Windowed",
            state.windowed.map(fmt_bool).unwrap_or_else(|| NONE_LABEL.to_string()),
        ),
        ("Name", fmt_str(&state.name)),
        ("Icon", fmt_path(&state.icon)),
        ("Hidden imports", fmt_list(&state.hidden_imports)),
        ("Exclude modules", fmt_list(&state.exclude_modules)),
        ("Add data", fmt_list(&state.add_data)),
        ("UPX dir", fmt_path(&state.upx_dir)),
        ("Runtime hook", fmt_path(&state.runtime_hook)),
        ("Version file", fmt_path(&state.version_file)),
        ("Manifest", fmt_path(&state.manifest)),
        ("Key", if state.key.is_some() { "(set)".to_string() } else { NONE_LABEL.to_string() }),
        ("Strip", fmt_bool(state.strip)),
        ("Bootloader ignore signals", fmt_bool(state.bootloader_ignore_signals)),
        ("Codesign identity", fmt_str(&state.codesign_identity)),
        ("Entitlements file", fmt_path(&state.entitlements_file)),
        ("Clean", fmt_bool(state.clean)),
        ("Debug", fmt_bool(state.debug)),
        ("Verbose", fmt_bool(state.verbose)),
        ("Dev mode", fmt_bool(state.dev_mode)),
        ("Spec path", fmt_path(&state.spec_path)),
        ("Work path", fmt_path(&state.work_path)),
        ("Python path", fmt_str(&state.python_path)),
    ]
}

/// Rows for a finished configuration
pub fn config_rows(config: &BuildConfig) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Script", config.input_file.display().to_string()),
        ("Output dir", config.output.display().to_string()),
        ("Mode", fmt_mode(Some(config.onefile))),
        ("Windowed", fmt_bool(config.windowed)),
        ("Name", fmt_str(&config.name)),
        ("Icon", fmt_path(&config.icon)),
        ("Hidden imports", fmt_list(&config.hidden_imports)),
        ("Exclude modules", fmt_list(&config.exclude_modules)),
        ("Add data", fmt_list(&config.add_data)),
    ];

    // Optional extras only show up when set, to keep the summary short
    let extras = [
        ("UPX dir", config.upx_dir.as_ref().map(|p| p.display().to_string())),
        ("Runtime hook", config.runtime_hook.as_ref().map(|p| p.display().to_string())),
        ("Version file", config.version_file.as_ref().map(|p| p.display().to_string())),
        ("Manifest", config.manifest.as_ref().map(|p| p.display().to_string())),
        ("Key", config.key.as_ref().map(|_| "(set)".to_string())),
        ("Codesign identity", config.codesign_identity.clone()),
        ("Entitlements file", config.entitlements_file.as_ref().map(|p| p.display().to_string())),
        ("Spec path", config.spec_path.as_ref().map(|p| p.display().to_string())),
        ("Work path", config.work_path.as_ref().map(|p| p.display().to_string())),
        ("Python path", config.python_path.clone()),
    ];
    rows.extend(extras.into_iter().filter_map(|(label, value)| value.map(|v| (label, v))));

    let toggles = [
        ("Strip", config.strip),
        ("Bootloader ignore signals", config.bootloader_ignore_signals),
        ("Clean", config.clean),
        ("Debug", config.debug),
        ("Verbose", config.verbose),
    ];
    let enabled: Vec<&str> = toggles
        .iter()
        .filter(|(_, on)| *on)
        .map(|(label, _)| *label)
        .collect();
    rows.push((
        "Options",
        if enabled.is_empty() {
            NONE_LABEL.to_string()
        } else {
            enabled.join(", ")
        },
    ));

    rows
}

/// Render label/value rows as a two column table
pub fn render_table(rows: &[(&str, String)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Setting").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    for (label, value) in rows {
        let value_cell = if value == NONE_LABEL {
            Cell::new(value).fg(Color::DarkGrey)
        } else {
            Cell::new(value).fg(Color::Cyan)
        };
        table.add_row(vec![
            Cell::new(label).set_alignment(CellAlignment::Right),
            value_cell,
        ]);
    }

    table
}

fn write_indented(sink: &mut dyn OutputSink, table: &Table) {
    for line in table.to_string().lines() {
        sink.write_line(&format!("    {}", line));
    }
}

/// Show everything collected so far, developer options included
pub fn display_help_state(sink: &mut dyn OutputSink, state: &ConfigBuilder) {
    print_section(sink, "Current variables & dev options (help)");
    write_indented(sink, &render_table(&builder_rows(state)));
    sink.write_line("");
}

/// Show the finished configuration before the build starts
pub fn display_build_summary(sink: &mut dyn OutputSink, config: &BuildConfig) {
    print_section(sink, "BUILD SUMMARY");
    write_indented(sink, &render_table(&config_rows(config)));
    sink.write_line("");
}
