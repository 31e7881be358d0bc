//! Keeps `tests/unit` in step with `src`: one test file per source file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    /// Source files that only wire modules together or start the binary
    fn is_wiring(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn relative_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        for path in walk(base)? {
            let relative = path
                .strip_prefix(base)
                .map_err(|_strip_error| io::Error::other("path outside base"))?;
            paths.insert(relative.to_string_lossy().replace('\\', "/"));
        }
        Ok(paths)
    }

    /// Every `.rs` file and directory below `dir`
    fn walk(dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        if !dir.is_dir() {
            return Ok(found);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                found.push(path.clone());
                found.extend(walk(&path)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                found.push(path);
            }
        }
        Ok(found)
    }

    // Tests every source file has a unit test file at the mirrored path
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = relative_paths(Path::new(SRC)).unwrap_or_default();
        let unit = relative_paths(Path::new(UNIT)).unwrap_or_default();
        assert!(!src.is_empty(), "no source files found under {SRC}");

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_wiring(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives the source file it covers
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = relative_paths(Path::new(SRC)).unwrap_or_default();
        let unit = relative_paths(Path::new(UNIT)).unwrap_or_default();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - {UNIT}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every test file declares at least one test and opens with a module doc
    #[test]
    fn test_all_test_files_contain_documented_tests() {
        let files = walk(Path::new("tests")).unwrap_or_default();
        let mut problems = Vec::new();

        for path in files.iter().filter(|path| path.is_file()) {
            if path.file_name().and_then(|name| name.to_str()) == Some("mod.rs") {
                continue;
            }
            let Ok(content) = fs::read_to_string(path) else {
                problems.push(format!("  - {} (unreadable)", path.display()));
                continue;
            };
            if !content.contains("#[test]") {
                problems.push(format!("  - {} (no #[test])", path.display()));
            }
            if !content.trim_start().starts_with("//!") {
                problems.push(format!("  - {} (no module doc)", path.display()));
            }
        }

        assert!(
            problems.is_empty(),
            "Test files that need attention:\n{}",
            problems.join("\n")
        );
    }
}
