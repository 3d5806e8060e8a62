pub mod identifiers;

use crate::error::ScanError;
use crate::Identifier;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A target ending in `...` is walked recursively; a bare directory
/// contributes only its own source files.
const RECURSIVE_SUFFIX: &str = "...";

/// Resolve scan targets to source files and extract their identifier streams,
/// in deterministic file order. Any unresolvable target fails the whole scan
/// before a single identifier is produced.
pub fn collect_identifiers(
    targets: &[String],
    include_tests: bool,
) -> Result<Vec<Identifier>, ScanError> {
    let mut files = Vec::new();

    if targets.is_empty() {
        resolve_target(".", &mut files)?;
    } else {
        for target in targets {
            resolve_target(target, &mut files)?;
        }
    }

    let mut out = Vec::new();
    for file in files {
        if !include_tests && is_test_file(&file) {
            continue;
        }
        let content = fs::read_to_string(&file).map_err(|source| ScanError::Io {
            path: file.clone(),
            source,
        })?;
        identifiers::extract(&content, &file, &mut out);
    }

    Ok(out)
}

fn resolve_target(target: &str, files: &mut Vec<PathBuf>) -> Result<(), ScanError> {
    if let Some(prefix) = target.strip_suffix(RECURSIVE_SUFFIX) {
        let prefix = prefix.trim_end_matches('/');
        let root = if prefix.is_empty() {
            Path::new(".")
        } else {
            Path::new(prefix)
        };
        if !root.is_dir() {
            return Err(ScanError::TargetNotFound(root.to_path_buf()));
        }
        collect_dir(root, None, files);
        return Ok(());
    }

    let path = Path::new(target);
    if path.is_dir() {
        collect_dir(path, Some(1), files);
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        return Err(ScanError::TargetNotFound(path.to_path_buf()));
    }
    Ok(())
}

fn collect_dir(root: &Path, max_depth: Option<usize>, files: &mut Vec<PathBuf>) {
    let mut walk = WalkDir::new(root).sort_by_file_name();
    if let Some(depth) = max_depth {
        walk = walk.max_depth(depth);
    }

    for entry in walk.into_iter().filter_entry(|e| !is_hidden(e)) {
        let Ok(entry) = entry else { continue };
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some("rs")
        {
            files.push(entry.path().to_path_buf());
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Test-labeled sources: `*_test.rs`, `test_*.rs`, or anything under a
/// `tests` directory.
fn is_test_file(path: &Path) -> bool {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    if stem.ends_with("_test") || stem.starts_with("test_") {
        return true;
    }
    path.components().any(|c| c.as_os_str() == "tests")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let err = collect_identifiers(&["no/such/path.rs".to_string()], true).unwrap_err();
        assert!(matches!(err, ScanError::TargetNotFound(_)));
    }

    #[test]
    fn test_single_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "main.rs", "fn begining() {}\n");

        let idents =
            collect_identifiers(&[file.display().to_string()], true).unwrap();
        assert_eq!(idents.len(), 1);
        assert_eq!(idents[0].name, "begining");
    }

    #[test]
    fn test_directory_is_not_recursive_without_wildcard() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "top.rs", "fn top_level() {}\n");
        write(dir.path(), "nested/inner.rs", "fn inner_level() {}\n");

        let idents =
            collect_identifiers(&[dir.path().display().to_string()], true).unwrap();
        assert_eq!(idents.len(), 1);
        assert_eq!(idents[0].name, "top_level");

        let pattern = format!("{}/...", dir.path().display());
        let idents = collect_identifiers(&[pattern], true).unwrap();
        let names: Vec<_> = idents.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["inner_level", "top_level"]);
    }

    #[test]
    fn test_test_files_excluded_on_request() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "lib.rs", "fn keep_me() {}\n");
        write(dir.path(), "lib_test.rs", "fn drop_me() {}\n");
        write(dir.path(), "tests/suite.rs", "fn drop_me_too() {}\n");

        let pattern = format!("{}/...", dir.path().display());

        let with_tests = collect_identifiers(&[pattern.clone()], true).unwrap();
        let names: Vec<_> = with_tests.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["keep_me", "drop_me", "drop_me_too"]);

        let without = collect_identifiers(&[pattern], false).unwrap();
        let names: Vec<_> = without.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["keep_me"]);
    }

    #[test]
    fn test_file_order_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.rs", "fn from_b() {}\n");
        write(dir.path(), "a.rs", "fn from_a() {}\n");
        write(dir.path(), "c.rs", "fn from_c() {}\n");

        let target = dir.path().display().to_string();
        let first = collect_identifiers(&[target.clone()], true).unwrap();
        let names: Vec<_> = first.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["from_a", "from_b", "from_c"]);

        let second = collect_identifiers(&[target], true).unwrap();
        assert_eq!(
            names,
            second.iter().map(|i| i.name.as_str()).collect::<Vec<_>>()
        );
    }
}
