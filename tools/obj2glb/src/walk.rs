//! Recursive discovery of OBJ files

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find every `.obj` file under `dir`, sorted by path.
///
/// The extension match is exact, so `.OBJ` files are not picked up.
/// Unreadable directory entries are skipped.
pub fn find_obj_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("obj") {
            files.push(path.to_path_buf());
        }
    }

    // Sorted traversal keeps node naming deterministic across platforms
    files.sort();
    files
}
