use crate::error::{FileToolsError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the immediate entries of a directory, keeping only those that do not
/// resolve to a directory (a symlink pointing at a directory is skipped too).
/// Returns bare file names as a set; directory listings cannot repeat a name,
/// the set type just makes that explicit.
pub fn list_files_shallow<P: AsRef<Path>>(dir: P) -> Result<HashSet<String>> {
    let dir = dir.as_ref();
    let entries =
        std::fs::read_dir(dir).map_err(|e| FileToolsError::from_io(e, dir.to_path_buf()))?;

    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| FileToolsError::from_io(e, dir.to_path_buf()))?;
        if entry.path().is_dir() {
            continue;
        }
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

/// Walks a directory tree depth-first up to `max_depth` levels below the root,
/// following symbolic links, and returns the non-directory paths in traversal
/// order. A depth of 0 considers only the root itself, which is a directory,
/// so the result is empty; a depth of 1 covers immediate children.
///
/// Symlink cycles are not guarded against here; the walk surfaces whatever the
/// underlying traversal reports for a loop.
pub fn list_files_deep<P: AsRef<Path>>(dir: P, max_depth: usize) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir).max_depth(max_depth).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        paths.push(entry.path().to_path_buf());
    }

    Ok(paths)
}
