//! The compilation database and its on-disk form.
//!
//! The output format is the standard clang compilation database: a JSON
//! array of objects with exactly the keys `directory`, `command` and
//! `file`, consumed by clangd and most C++ tooling.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::diagnostic::GeneratorError;

/// One entry of the compilation database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompileCommand {
    /// Working directory for the compile, the build output root.
    pub directory: String,

    /// The full single-line compiler invocation.
    pub command: String,

    /// Absolute path of the compiled source file.
    pub file: String,
}

/// An ordered collection of compile commands.
///
/// Entry order follows source discovery order; it carries no meaning but
/// keeps repeated runs byte-identical.
#[derive(Debug, Clone, Default)]
pub struct CompilationDatabase {
    commands: Vec<CompileCommand>,
}

impl CompilationDatabase {
    /// Creates a database from the given commands, preserving their order.
    pub fn new(commands: Vec<CompileCommand>) -> Self {
        Self { commands }
    }

    /// Entries in output order.
    pub fn commands(&self) -> &[CompileCommand] {
        &self.commands
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the database holds no entries.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Loads a database from disk.
    ///
    /// Returns `Ok(None)` if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Option<Self>, GeneratorError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GeneratorError::io(path, e.to_string()))?;

        let commands: Vec<CompileCommand> = serde_json::from_str(&content).map_err(|e| {
            GeneratorError::io(path, format!("Failed to parse compilation database: {e}"))
        })?;

        Ok(Some(Self { commands }))
    }

    /// Writes the database to disk, replacing any existing file.
    ///
    /// The content goes to a temporary file in the destination directory
    /// first and is renamed over the target, so a crash mid-write never
    /// leaves a truncated database behind.
    pub fn save(&self, path: &Path) -> Result<(), GeneratorError> {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

        let content = serde_json::to_string_pretty(&self.commands).map_err(|e| {
            GeneratorError::io(path, format!("Failed to serialize compilation database: {e}"))
        })?;

        let mut tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
        .map_err(|e| GeneratorError::io(path, e.to_string()))?;

        tmp.write_all(content.as_bytes())
            .map_err(|e| GeneratorError::io(path, e.to_string()))?;

        tmp.persist(path)
            .map_err(|e| GeneratorError::io(path, e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> CompilationDatabase {
        CompilationDatabase::new(vec![CompileCommand {
            directory: "/proj/build".to_string(),
            command: "/usr/bin/g++ -Wall -o /proj/build/Foo.o /proj/src/Foo.cpp".to_string(),
            file: "/proj/src/Foo.cpp".to_string(),
        }])
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compile_commands.json");

        let db = sample();
        db.save(&path).unwrap();

        let loaded = CompilationDatabase::load(&path).unwrap().unwrap();
        assert_eq!(loaded.commands(), db.commands());
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compile_commands.json");

        assert!(CompilationDatabase::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compile_commands.json");
        std::fs::write(&path, "stale garbage").unwrap();

        sample().save(&path).unwrap();

        let loaded = CompilationDatabase::load(&path).unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_output_is_array_of_three_key_objects() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("compile_commands.json");
        sample().save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let entries = raw.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        let obj = entries[0].as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["command", "directory", "file"]);
    }
}
