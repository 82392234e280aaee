//! Locating and loading the compiler options recorded by the build.
//!
//! Gradle writes the exact flags it passed to the compiler into an
//! `options.txt` inside the compile task's output directory, one flag per
//! line.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::diagnostic::GeneratorError;

/// Finds the options file for the given compile task under the project root.
///
/// The match is the first path (lexicographic order) ending with
/// `<task>/options.txt`. Re-discovered on every invocation; nothing is
/// cached.
pub fn find_options_file(project_root: &Path, task: &str) -> Result<PathBuf, GeneratorError> {
    let suffix = PathBuf::from(task).join("options.txt");

    WalkDir::new(project_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|entry| entry.file_type().is_file() && entry.path().ends_with(&suffix))
        .map(|entry| entry.into_path())
        .ok_or_else(|| GeneratorError::OptionsNotFound {
            task: task.to_string(),
        })
}

/// Reads an options file and flattens it to a single command-line fragment.
///
/// Every line break (CRLF counts as one) becomes exactly one space; nothing
/// else is altered, so re-applying the flattening is a no-op.
pub fn load_option_string(path: &Path) -> Result<String, GeneratorError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| GeneratorError::io(path, e.to_string()))?;

    Ok(flatten(&content))
}

fn flatten(content: &str) -> String {
    content.replace("\r\n", " ").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flatten_replaces_each_newline_with_one_space() {
        assert_eq!(flatten("-I/inc\n-Wall"), "-I/inc -Wall");
        assert_eq!(flatten("-I/inc\r\n-Wall\r\n-O2"), "-I/inc -Wall -O2");
        assert_eq!(flatten("-Wall\n"), "-Wall ");
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let once = flatten("-I/inc\n-Wall\n-g");
        assert_eq!(flatten(&once), once);
    }

    #[test]
    fn test_finds_options_under_task_directory() {
        let root = TempDir::new().unwrap();
        let task_dir = root
            .path()
            .join("build")
            .join("tmp")
            .join("compileFrcUserProgramDebugExecutableFrcUserProgramCpp");
        std::fs::create_dir_all(&task_dir).unwrap();
        let options = task_dir.join("options.txt");
        std::fs::write(&options, "-Wall\n").unwrap();

        let found = find_options_file(
            root.path(),
            "compileFrcUserProgramDebugExecutableFrcUserProgramCpp",
        )
        .unwrap();
        assert_eq!(found, options);
    }

    #[test]
    fn test_options_for_other_task_is_not_found() {
        let root = TempDir::new().unwrap();
        let task_dir = root
            .path()
            .join("build")
            .join("compileFrcUserProgramReleaseExecutableFrcUserProgramCpp");
        std::fs::create_dir_all(&task_dir).unwrap();
        std::fs::write(task_dir.join("options.txt"), "-O2\n").unwrap();

        let err = find_options_file(
            root.path(),
            "compileFrcUserProgramDebugExecutableFrcUserProgramCpp",
        )
        .unwrap_err();
        assert!(matches!(err, GeneratorError::OptionsNotFound { ref task }
            if task == "compileFrcUserProgramDebugExecutableFrcUserProgramCpp"));
    }

    #[test]
    fn test_load_flattens_file_content() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("options.txt");
        std::fs::write(&path, "-I/inc\n-Wall").unwrap();

        assert_eq!(load_option_string(&path).unwrap(), "-I/inc -Wall");
    }
}
