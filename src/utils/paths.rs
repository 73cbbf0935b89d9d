//! Path and list helpers for user-typed values

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;

/// Extension a script must carry to be accepted
pub const SCRIPT_EXTENSION: &str = "py";

/// Expand a leading `~` to the user's home directory
pub fn expand_home(raw: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (raw, home) {
        ("~", Some(home)) => home,
        (s, Some(home)) if s.starts_with("~/") || s.starts_with("~\\") => home.join(&s[2..]),
        (s, _) => PathBuf::from(s),
    }
}

/// Expand `~` and turn the result into an absolute, canonical path.
///
/// Existing paths have their symlinks resolved; on Windows the verbatim
/// `\\?\` prefix is dropped whenever the plain form means the same file.
/// Paths that do not exist yet are made absolute against the current
/// directory with `.` and `..` components folded away.
pub fn resolve_path(raw: &str) -> PathBuf {
    let expanded = expand_home(raw.trim());

    if let Ok(canonical) = dunce::canonicalize(&expanded) {
        return canonical;
    }

    match expanded.absolutize() {
        Ok(Cow::Borrowed(p)) => p.to_path_buf(),
        Ok(Cow::Owned(p)) => p,
        Err(e) => {
            log::debug!("could not absolutize {}: {}", expanded.display(), e);
            expanded
        }
    }
}

/// Resolve a path only when the user typed something
pub fn resolve_optional_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(resolve_path(trimmed))
    }
}

/// Keep a string only when it has non-blank content
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a comma separated answer, trimming entries and dropping blanks
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check that `path` is an existing file with the script extension
pub fn is_script_file(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(SCRIPT_EXTENSION))
        .unwrap_or(false);

    has_extension && path.exists()
}
