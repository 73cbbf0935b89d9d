//! Tests for composing the packager command line

use std::path::PathBuf;

use pyforge::build::{compose_args, PackagerCommand, DEFAULT_PACKAGER};
use pyforge::cli::BuildConfig;
use pyforge::utils::split_list;

fn config() -> BuildConfig {
    BuildConfig::new(
        PathBuf::from("/home/dev/project/app.py"),
        PathBuf::from("/home/dev/project/dist"),
    )
}

fn count_flag(args: &[String], prefix: &str) -> usize {
    args.iter().filter(|a| a.starts_with(prefix)).count()
}

#[test]
fn test_exactly_one_mode_flag() {
    for onefile in [true, false] {
        let mut cfg = config();
        cfg.onefile = onefile;
        cfg.windowed = true;
        cfg.clean = true;
        let args = compose_args(&cfg);

        let onefile_count = count_flag(&args, "--onefile");
        let onedir_count = count_flag(&args, "--onedir");
        assert_eq!(onefile_count + onedir_count, 1, "args: {:?}", args);
        assert_eq!(args[0], if onefile { "--onefile" } else { "--onedir" });
    }
}

#[test]
fn test_defaults_emit_no_optional_flags() {
    let args = compose_args(&config());

    assert_eq!(args, vec!["--onefile", "/home/dev/project/app.py"]);
    for flag in [
        "--windowed",
        "--name",
        "--icon",
        "--hidden-import",
        "--exclude-module",
        "--add-data",
        "--upx-dir",
        "--runtime-hook",
        "--version-file",
        "--manifest",
        "--key",
        "--strip",
        "--bootloader-ignore-signals",
        "--codesign-identity",
        "--entitlements-file",
        "--clean",
        "--debug",
        "--verbose",
        "--specpath",
        "--workpath",
        "--python",
    ] {
        assert_eq!(count_flag(&args, flag), 0, "{} should be absent", flag);
    }
}

#[test]
fn test_list_fields_repeat_flags_in_order() {
    let mut cfg = config();
    cfg.hidden_imports = split_list("a, b,,c");
    let args = compose_args(&cfg);

    let hidden: Vec<&String> = args
        .iter()
        .filter(|a| a.starts_with("--hidden-import="))
        .collect();
    assert_eq!(
        hidden,
        vec!["--hidden-import=a", "--hidden-import=b", "--hidden-import=c"]
    );
}

#[test]
fn test_add_data_passed_through_unmodified() {
    let mut cfg = config();
    cfg.add_data = vec!["no-separator".to_string(), "a;b;c".to_string()];
    let args = compose_args(&cfg);

    assert!(args.contains(&"--add-data=no-separator".to_string()));
    assert!(args.contains(&"--add-data=a;b;c".to_string()));
}

#[test]
fn test_full_configuration_order() {
    let mut cfg = config();
    cfg.onefile = false;
    cfg.windowed = true;
    cfg.name = Some("tool".to_string());
    cfg.icon = Some(PathBuf::from("/icons/app.ico"));
    cfg.hidden_imports = vec!["h1".to_string(), "h2".to_string()];
    cfg.exclude_modules = vec!["tkinter".to_string()];
    cfg.add_data = vec!["src;dest".to_string()];
    cfg.upx_dir = Some(PathBuf::from("/opt/upx"));
    cfg.runtime_hook = Some(PathBuf::from("/hooks/rt.py"));
    cfg.version_file = Some(PathBuf::from("/meta/version.txt"));
    cfg.manifest = Some(PathBuf::from("/meta/app.manifest"));
    cfg.key = Some("k3y".to_string());
    cfg.strip = true;
    cfg.bootloader_ignore_signals = true;
    cfg.codesign_identity = Some("Dev ID".to_string());
    cfg.entitlements_file = Some(PathBuf::from("/meta/ent.plist"));
    cfg.clean = true;
    cfg.debug = true;
    cfg.verbose = true;
    cfg.no_confirm = true;
    cfg.dev_mode = true;
    cfg.spec_path = Some(PathBuf::from("/build/spec"));
    cfg.work_path = Some(PathBuf::from("/build/work"));
    cfg.python_path = Some("/usr/bin/python3".to_string());

    let args = compose_args(&cfg);

    assert_eq!(
        args,
        vec![
            "--onedir",
            "--windowed",
            "--name=tool",
            "--icon=/icons/app.ico",
            "--hidden-import=h1",
            "--hidden-import=h2",
            "--exclude-module=tkinter",
            "--add-data=src;dest",
            "--upx-dir=/opt/upx",
            "--runtime-hook=/hooks/rt.py",
            "--version-file=/meta/version.txt",
            "--manifest=/meta/app.manifest",
            "--key=k3y",
            "--strip",
            "--bootloader-ignore-signals",
            "--codesign-identity=Dev ID",
            "--entitlements-file=/meta/ent.plist",
            "--clean",
            "--debug=all",
            "--verbose",
            "--specpath=/build/spec",
            "--workpath=/build/work",
            "--python=/usr/bin/python3",
            "/home/dev/project/app.py",
        ]
    );
}

#[test]
fn test_dev_fields_emitted_without_dev_mode() {
    let mut cfg = config();
    cfg.dev_mode = false;
    cfg.work_path = Some(PathBuf::from("/tmp/work"));
    let args = compose_args(&cfg);

    assert!(args.contains(&"--workpath=/tmp/work".to_string()));
}

#[test]
fn test_no_confirm_is_not_a_packager_flag() {
    let mut cfg = config();
    cfg.no_confirm = true;
    let args = compose_args(&cfg);

    assert_eq!(args.len(), 2);
    assert_eq!(count_flag(&args, "--noconfirm"), 0);
}

#[test]
fn test_script_is_last_argument() {
    let mut cfg = config();
    cfg.verbose = true;
    cfg.name = Some("x".to_string());
    let args = compose_args(&cfg);

    assert_eq!(args.last().map(String::as_str), Some("/home/dev/project/app.py"));
}

#[test]
fn test_packager_command_uses_program() {
    let command = PackagerCommand::from_config(DEFAULT_PACKAGER, &config());
    assert_eq!(command.program, "pyinstaller");
    assert_eq!(command.args, compose_args(&config()));
    assert_eq!(
        command.to_string(),
        "pyinstaller --onefile /home/dev/project/app.py"
    );
}
