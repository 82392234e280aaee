//! Cross-compiler discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::GeneratorConfig;
use crate::diagnostic::GeneratorError;

/// Resolves the roboRIO cross-compiler for the configured year.
///
/// An explicit `--compiler` path wins if it points at an existing file; a
/// stale explicit path degrades to the search rather than failing. The
/// search walks the home directory in lexicographic order and takes the
/// first path that ends with the vendor installation suffix.
pub fn find_compiler(config: &GeneratorConfig) -> Result<PathBuf, GeneratorError> {
    if let Some(explicit) = &config.compiler_path {
        if explicit.is_file() {
            return Ok(explicit.clone());
        }
    }

    for root in search_roots() {
        if let Some(found) = find_toolchain_in(&root, config.year) {
            return Ok(found);
        }
    }

    Err(GeneratorError::CompilerNotFound { year: config.year })
}

/// Searches one directory tree for a toolchain installation.
///
/// Matching is component-wise (`Path::ends_with`), so it behaves the same
/// regardless of the platform's path separator.
pub fn find_toolchain_in(root: &Path, year: i32) -> Option<PathBuf> {
    let suffix = toolchain_suffix(year);

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|entry| entry.file_type().is_file() && entry.path().ends_with(&suffix))
        .map(|entry| entry.into_path())
}

/// Relative installation suffix of the roboRIO g++ for a toolchain year.
///
/// The year appears twice, matching the WPILib installer layout, e.g.
/// `2025/roborio/bin/arm-frc2025-linux-gnueabi-g++`.
fn toolchain_suffix(year: i32) -> PathBuf {
    PathBuf::from(year.to_string())
        .join("roborio")
        .join("bin")
        .join(format!("arm-frc{year}-linux-gnueabi-g++"))
}

/// Directories to search for a toolchain installation.
fn search_roots() -> Vec<PathBuf> {
    match directories::BaseDirs::new() {
        Some(dirs) => vec![dirs.home_dir().to_path_buf()],
        None => vec![shared_home()],
    }
}

/// Shared home location used when no user home directory can be determined.
fn shared_home() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\Users\\Public")
    } else {
        PathBuf::from("/home")
    }
}
