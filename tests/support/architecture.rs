use std::fs;
use std::path::{Path, PathBuf};

/// A source line that broke a layering rule.
#[derive(Debug)]
pub struct Hit {
    pub file: String,
    pub line: usize,
    pub text: String,
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn display(path: &Path) -> String {
    path.strip_prefix(crate_root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Every `.rs` file under `relative_dir`, sorted.
pub fn source_files(relative_dir: &str) -> Vec<PathBuf> {
    let mut pending = vec![crate_root().join(relative_dir)];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        let entries =
            fs::read_dir(&dir).unwrap_or_else(|e| panic!("read dir {}: {e}", dir.display()));
        for entry in entries {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

fn scan<F>(files: Vec<PathBuf>, flagged: F) -> Vec<Hit>
where
    F: Fn(&str) -> bool,
{
    let mut hits = Vec::new();
    for file in files {
        let content =
            fs::read_to_string(&file).unwrap_or_else(|e| panic!("read {}: {e}", file.display()));
        for (idx, text) in content.lines().enumerate() {
            if flagged(text.trim()) {
                hits.push(Hit {
                    file: display(&file),
                    line: idx + 1,
                    text: text.to_string(),
                });
            }
        }
    }
    hits
}

/// Non-comment lines under `relative_dir` mentioning any of `paths`.
pub fn uses_of(relative_dir: &str, paths: &[&str]) -> Vec<Hit> {
    scan(source_files(relative_dir), |line| {
        !line.starts_with("//") && paths.iter().any(|p| line.contains(p))
    })
}

/// Lines in `mod.rs` files that do more than declare modules.
pub fn mod_file_violations(relative_dir: &str) -> Vec<Hit> {
    let mod_files = source_files(relative_dir)
        .into_iter()
        .filter(|file| file.file_name().is_some_and(|name| name == "mod.rs"))
        .collect();

    scan(mod_files, |line| {
        !(line.is_empty()
            || line.starts_with("//")
            || line.starts_with("pub mod ")
            || line.starts_with("mod ")
            || line.starts_with("#[cfg"))
    })
}

/// Files under `relative_dir` (excluding `mod.rs`) with no line containing `needle`.
pub fn files_missing(relative_dir: &str, needle: &str) -> Vec<String> {
    source_files(relative_dir)
        .into_iter()
        .filter(|file| file.file_name().is_some_and(|name| name != "mod.rs"))
        .filter(|file| {
            fs::read_to_string(file)
                .map(|content| !content.contains(needle))
                .unwrap_or(true)
        })
        .map(|file| display(&file))
        .collect()
}
