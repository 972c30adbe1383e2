//! Shared setup for commands: config resolution and file discovery.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use glob::Pattern;

use super::args::CommonArgs;
use crate::config::{Config, TEST_FILE_PATTERNS, load_config};
use crate::engine::scan_files;

/// Everything a command needs before touching any source file: the merged
/// configuration and the list of files to analyze.
pub struct ProjectContext {
    pub config: Config,
    pub root_dir: String,
    pub files: Vec<String>,
    pub verbose: bool,
}

impl ProjectContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let start_dir = common
            .source_root
            .as_deref()
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let loaded = load_config(&start_dir)?;
        let mut config = loaded.config;

        if common.verbose && !loaded.from_file {
            eprintln!(
                "{} No config file found, using defaults",
                "info:".bold().cyan()
            );
        }

        // CLI flags win over the config file.
        if let Some(create_object) = &common.create_object {
            config.create_object = create_object.clone();
        }

        let root_dir = match &common.source_root {
            Some(path) => path.to_string_lossy().into_owned(),
            None => config.source_root.clone(),
        };

        let scan = scan_files(
            &root_dir,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            common.verbose,
        );

        if scan.skipped_count > 0 && !common.verbose {
            eprintln!(
                "{} {} path(s) could not be accessed (use {} for details)",
                "warning:".bold().yellow(),
                scan.skipped_count,
                "-v".cyan()
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan.files,
            verbose: common.verbose,
        })
    }

    /// Predicate matching the configured ignore globs, for re-checking paths
    /// handed to the scanner after discovery.
    pub fn ignore_predicate(&self) -> Box<dyn Fn(&str) -> bool + Send + Sync> {
        let mut patterns: Vec<Pattern> = self
            .config
            .ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        if self.config.ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }
        Box::new(move |path: &str| patterns.iter().any(|p| p.matches(path)))
    }
}
