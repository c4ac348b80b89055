use std::path::Path;
use walkdir::WalkDir;

use crate::error::{ListingError, ListingResult};
use crate::scanner::filter::{entry_name, has_suffix};

/// Find the names of the direct entries of `dir` that end with `suffix`.
///
/// Only the top level is listed and symlinks are not followed. Files and
/// subdirectories are treated the same; the name alone decides. Names are
/// returned in the order the filesystem yields them.
///
/// A matching entry whose name is not valid UTF-8 is an error.
pub fn find_matching_entries(dir: &Path, suffix: &str) -> ListingResult<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let Some(name) = entry_name(entry.file_name()) else {
            // A matching name that JSON cannot carry must not vanish from the list.
            if has_suffix(&entry.file_name().to_string_lossy(), suffix) {
                return Err(ListingError::invalid_name(entry.path()));
            }
            tracing::trace!("Ignoring non UTF-8 name {}", entry.path().display());
            continue;
        };

        if has_suffix(name, suffix) {
            names.push(name.to_string());
        } else {
            tracing::trace!("Ignoring {}", name);
        }
    }

    tracing::debug!("Matched {} entries in {}", names.len(), dir.display());
    Ok(names)
}
