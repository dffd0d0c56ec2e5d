//! Checks that `tests/unit` mirrors `src` and that every mirrored file is compiled

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    // Crate roots under tests/ that only declare modules
    const HARNESSES: [&str; 2] = ["unit.rs", "meta.rs"];

    // Tests every library source file has a unit test file at the mirrored path
    // Verified by deleting tests/unit/spatial/raster.rs
    #[test]
    fn test_every_source_file_has_a_unit_test_file() {
        let sources = mirrored_files(Path::new("src")).unwrap_or_default();
        let units = mirrored_files(Path::new("tests/unit")).unwrap_or_default();
        assert!(!sources.is_empty(), "no source files found under src/");

        let missing: Vec<String> = sources
            .difference(&units)
            .map(|path| format!("  - src/{0} -> tests/unit/{0}", path.display()))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/math/vector.rs
    #[test]
    fn test_every_unit_test_file_has_a_source_file() {
        let sources = mirrored_files(Path::new("src")).unwrap_or_default();
        let units = mirrored_files(Path::new("tests/unit")).unwrap_or_default();

        let orphaned: Vec<String> = units
            .difference(&sources)
            .map(|path| format!("  - tests/unit/{}", path.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files with no source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every file under tests/unit is part of the unit test target
    // Verified by removing a #[path] attribute from tests/unit.rs
    #[test]
    fn test_every_unit_test_file_is_compiled() {
        let reached = module_tree(Path::new("tests/unit.rs")).unwrap_or_default();
        let on_disk = rust_files(Path::new("tests/unit")).unwrap_or_default();
        assert!(!on_disk.is_empty(), "no files found under tests/unit/");

        let unreached: Vec<String> = on_disk
            .difference(&reached)
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            unreached.is_empty(),
            "Files not reachable from tests/unit.rs:\n{}",
            unreached.join("\n")
        );
    }

    // Tests the layout checks themselves are compiled into the meta target
    // Verified by renaming tests/meta/coverage.rs
    #[test]
    fn test_meta_checks_are_compiled() {
        let reached = module_tree(Path::new("tests/meta.rs")).unwrap_or_default();
        assert!(reached.contains(Path::new("tests/meta/coverage.rs")));
    }

    // Tests every test file outside harnesses and module lists defines a test
    // Verified by removing the tests from tests/unit/io/color.rs
    #[test]
    fn test_every_test_file_contains_tests() {
        let files = rust_files(Path::new("tests")).unwrap_or_default();
        assert!(!files.is_empty(), "no files found under tests/");

        let empty: Vec<String> = files
            .iter()
            .filter(|path| !is_module_list(path))
            .filter(|path| {
                fs::read_to_string(path)
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }

    fn is_module_list(path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };
        name == "mod.rs" || (path.parent() == Some(Path::new("tests")) && HARNESSES.contains(&name))
    }

    /// Every `.rs` file below `dir`, as paths starting with `dir`
    fn rust_files(dir: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files.extend(rust_files(&path)?);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.insert(path);
            }
        }
        Ok(files)
    }

    /// Files below `dir` that take part in the src mirror, relative to `dir`
    ///
    /// Entry points and `mod.rs` files only organize modules and have no mirror.
    fn mirrored_files(dir: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        for path in rust_files(dir)? {
            let relative = path
                .strip_prefix(dir)
                .map_err(|_| io::Error::other("path outside scanned directory"))?;
            let skipped = ["lib.rs", "main.rs", "mod.rs"]
                .iter()
                .any(|name| relative.ends_with(name));
            if !skipped {
                files.insert(relative.to_path_buf());
            }
        }
        Ok(files)
    }

    /// Files compiled into the test target rooted at `root`
    ///
    /// Follows `mod name;` declarations and their `#[path]` attributes. Inline
    /// modules are ignored, since they add no files.
    fn module_tree(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut reached = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(file) = pending.pop() {
            if !reached.insert(file.clone()) {
                continue;
            }
            let parent = file.parent().unwrap_or_else(|| Path::new(""));
            let owns_directory = file == root || file.ends_with("mod.rs");
            let child_dir = if owns_directory {
                parent.to_path_buf()
            } else {
                parent.join(file.file_stem().unwrap_or_default())
            };

            let content = fs::read_to_string(&file)?;
            let mut explicit_path: Option<PathBuf> = None;
            for line in content.lines().map(str::trim) {
                if let Some(target) = line
                    .strip_prefix("#[path = \"")
                    .and_then(|rest| rest.strip_suffix("\"]"))
                {
                    explicit_path = Some(parent.join(target));
                    continue;
                }
                let declaration = line.strip_prefix("pub ").unwrap_or(line);
                let Some(name) = declaration
                    .strip_prefix("mod ")
                    .and_then(|rest| rest.strip_suffix(';'))
                else {
                    continue;
                };
                let child = explicit_path.take().unwrap_or_else(|| {
                    let flat = child_dir.join(format!("{name}.rs"));
                    if flat.exists() {
                        flat
                    } else {
                        child_dir.join(name).join("mod.rs")
                    }
                });
                pending.push(child);
            }
        }

        Ok(reached)
    }
}
