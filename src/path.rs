use std::path::Path;

/// Final path segment as a string, or empty when the path has none
/// (e.g. `/` or `..`).
pub fn file_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string()
}

pub fn file_stem<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string()
}

/// Extension of the final path segment: everything after the last `.` in the
/// file name, which may be empty for a name with a trailing dot. Returns
/// `None` only when the name contains no dot at all.
///
/// This is the last-dot rule, not `Path::extension`: `".gitignore"` yields
/// `Some("gitignore")` and `"trailing."` yields `Some("")`, where the standard
/// library returns `None` for both.
pub fn file_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    let name = file_name(path);
    name.rfind('.').map(|dot| name[dot + 1..].to_string())
}
