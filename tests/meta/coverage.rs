#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Source and test files that organise modules rather than hold logic
    fn is_structural(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    /// Every `.rs` file and directory under `root`, relative to it
    fn walk(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(|_| io::Error::other("path escaped walk root"))?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn tree(dir: &str) -> BTreeSet<String> {
        let root = Path::new(dir);
        assert!(root.is_dir(), "{dir} directory should exist");
        walk(root).unwrap_or_else(|error| unreachable!("failed to walk {dir}: {error}"))
    }

    // Every source file must have a unit test file at the same relative path
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = tree(UNIT_DIR);
        let missing: Vec<String> = tree(SRC_DIR)
            .into_iter()
            .filter(|path| !is_structural(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Unit test files must not outlive the source file they cover
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = tree(SRC_DIR);
        let orphaned: Vec<String> = tree(UNIT_DIR)
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    // Harness roots such as tests/unit.rs only declare the directory beside them
    fn is_harness_root(path: &Path) -> bool {
        path.parent() == Some(Path::new("tests")) && path.with_extension("").is_dir()
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let root = PathBuf::from("tests");
        let empty: Vec<String> = tree("tests")
            .into_iter()
            .map(|relative| root.join(relative))
            .filter(|path| path.is_file())
            .filter(|path| !is_harness_root(path) && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(path).map_or(true, |content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
