use std::ffi::OsStr;

/// Return true if the entry name ends with `suffix`.
///
/// The comparison is case-sensitive and looks at the whole name, so a
/// suffix like ".svg" also matches a file called ".svg".
pub fn has_suffix(name: &str, suffix: &str) -> bool {
    name.ends_with(suffix)
}

/// Convert a raw entry name to UTF-8, or `None` if it cannot be represented
/// as a JSON string.
pub fn entry_name(name: &OsStr) -> Option<&str> {
    name.to_str()
}
