//! C++ source discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Enumerates every `.cpp` file under the project root.
///
/// The walk is lexicographic, so the returned order is stable across runs.
/// No directory is excluded: generated source copies under the build tree
/// are discovered too, matching the build's own view of the project.
pub fn find_source_files(project_root: &Path) -> Vec<PathBuf> {
    let mut sources = Vec::new();

    for entry in WalkDir::new(project_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "cpp") {
            sources.push(path.to_path_buf());
        }
    }

    sources
}
