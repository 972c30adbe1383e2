//! Filesystem discovery of candidate source files.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Patterns without `*` or `?` wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Outcome of a filesystem walk.
pub struct FileScanResult {
    /// Candidate files, deduplicated, in sorted order.
    pub files: Vec<String>,
    /// Paths that could not be accessed during the walk.
    pub skipped_count: usize,
}

/// Walk the include roots under `base_dir` and collect every scannable
/// source file not excluded by an ignore pattern.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> FileScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    // Ignore entries split into literal path prefixes and glob patterns.
    let mut literal_ignores: Vec<PathBuf> = Vec::new();
    let mut glob_ignores: Vec<Pattern> = Vec::new();

    for entry in ignores {
        if is_glob_pattern(entry) {
            match Pattern::new(entry) {
                Ok(pattern) => glob_ignores.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            entry,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignores.push(Path::new(base_dir).join(entry));
        }
    }

    if ignore_test_files {
        for pattern in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(pattern) {
                glob_ignores.push(pattern);
            }
        }
    }

    for root in include_roots(base_dir, includes, verbose) {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignores.iter().any(|prefix| path.starts_with(prefix)) {
                continue;
            }
            if glob_ignores.iter().any(|p| p.matches(&path_str)) {
                continue;
            }
            if path.is_file() && is_scannable_file(path) {
                files.insert(path_str.into_owned());
            }
        }
    }

    FileScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

/// Resolve the configured includes to concrete directories. An empty list
/// means the whole base directory; glob includes expand to every matching
/// directory; literal includes are used as-is when they exist.
fn include_roots(base_dir: &str, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![Path::new(base_dir).to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        if is_glob_pattern(include) {
            let full_pattern = Path::new(base_dir).join(include);
            match glob(&full_pattern.to_string_lossy()) {
                Ok(entries) => {
                    roots.extend(entries.flatten().filter(|entry| entry.is_dir()));
                }
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid include pattern '{}': {}",
                            "warning:".bold().yellow(),
                            include,
                            e
                        );
                    }
                }
            }
        } else {
            let path = Path::new(base_dir).join(include);
            if path.exists() {
                roots.push(path);
            } else if verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }
    roots
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
