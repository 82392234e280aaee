//! Matching sources to their compiled object files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Finds the object file produced for `source` inside the build output tree.
///
/// The expected object name is the source basename with the extension
/// swapped to `.o`. The build tree is searched in lexicographic order and
/// the first file with exactly that name wins; duplicate basenames anywhere
/// under the build tree therefore resolve to the lexicographically first
/// one, not to the object compiled from this particular source.
///
/// `None` means the source was never compiled (or the build is stale); the
/// caller decides how to surface that.
pub fn find_object_file(build_dir: &Path, source: &Path) -> Option<PathBuf> {
    let object_name = source.with_extension("o").file_name()?.to_os_string();

    WalkDir::new(build_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|entry| {
            entry.file_type().is_file() && entry.file_name() == object_name.as_os_str()
        })
        .map(|entry| entry.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_matches_single_object() {
        let build = TempDir::new().unwrap();
        let objs = build.path().join("objs").join("release");
        std::fs::create_dir_all(&objs).unwrap();
        let object = objs.join("Foo.o");
        std::fs::write(&object, "").unwrap();

        let found = find_object_file(build.path(), Path::new("/proj/src/Foo.cpp")).unwrap();
        assert_eq!(found, object);
    }

    #[test]
    fn test_no_object_returns_none() {
        let build = TempDir::new().unwrap();
        std::fs::create_dir_all(build.path().join("objs")).unwrap();

        assert!(find_object_file(build.path(), Path::new("/proj/src/Foo.cpp")).is_none());
    }

    #[test]
    fn test_duplicate_basenames_take_lexicographically_first() {
        let build = TempDir::new().unwrap();
        for dir in ["zeta", "alpha"] {
            let d = build.path().join(dir);
            std::fs::create_dir_all(&d).unwrap();
            std::fs::write(d.join("Foo.o"), "").unwrap();
        }

        let found = find_object_file(build.path(), Path::new("Foo.cpp")).unwrap();
        assert_eq!(found, build.path().join("alpha").join("Foo.o"));
    }

    #[test]
    fn test_other_basenames_do_not_match() {
        let build = TempDir::new().unwrap();
        std::fs::write(build.path().join("Bar.o"), "").unwrap();

        assert!(find_object_file(build.path(), Path::new("Foo.cpp")).is_none());
    }
}
