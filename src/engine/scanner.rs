//! Per-file scan orchestration.
//!
//! A [`Scanner`] owns a parse cache and an optional ignore predicate, and
//! exposes the two operations the commands build on: analyze one file, and
//! rewrite one file. Rewrites invalidate the cache entry so a later scan of
//! the same path sees the mutated content.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use colored::Colorize;
use swc_ecma_visit::VisitWith;

use super::data::{ScanResult, StyleDeclaration};
use super::declarations::DeclarationCollector;
use super::diff::unused_declarations;
use super::parser::{ParsedSource, parse_source};
use super::rewriter::rewrite_path;
use super::usages::collect_used_names;
use crate::issues::ParseErrorIssue;

type IgnorePredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

pub struct Scanner {
    create_object: String,
    cache: HashMap<String, ParsedSource>,
    ignore: Option<IgnorePredicate>,
    parse_errors: Vec<ParseErrorIssue>,
}

impl Scanner {
    pub fn new(create_object: &str) -> Self {
        Self {
            create_object: create_object.to_string(),
            cache: HashMap::new(),
            ignore: None,
            parse_errors: Vec::new(),
        }
    }

    /// Skip files for which the predicate returns true.
    pub fn with_ignore(mut self, predicate: IgnorePredicate) -> Self {
        self.ignore = Some(predicate);
        self
    }

    /// Analyze one file. Returns `None` for ignored or unreadable files; a
    /// file that fails to parse yields an empty result and records a
    /// [`ParseErrorIssue`] instead of aborting the run.
    pub fn scan_one(&mut self, path: &str) -> Option<ScanResult> {
        if let Some(ignore) = &self.ignore
            && ignore(path)
        {
            return None;
        }

        if !self.cache.contains_key(path) {
            let code = fs::read_to_string(Path::new(path)).ok()?;
            match parse_source(code, path) {
                Ok(parsed) => {
                    self.cache.insert(path.to_string(), parsed);
                }
                Err(err) => {
                    self.parse_errors.push(ParseErrorIssue {
                        file_path: path.to_string(),
                        error: err.to_string(),
                    });
                    return Some(ScanResult::empty(path));
                }
            }
        }

        let parsed = self.cache.get(path)?;
        let mut collector = DeclarationCollector::new(&parsed.source_map, &self.create_object);
        parsed.module.visit_with(&mut collector);
        let used = collect_used_names(&parsed.module, &self.create_object);
        let unused = unused_declarations(&collector.declarations, &used);

        Some(ScanResult {
            file: path.to_string(),
            defined: collector.declarations,
            used,
            unused,
        })
    }

    /// Remove the given declarations from one file on disk.
    ///
    /// Returns false if the rewrite failed; other files are unaffected
    /// either way. An empty target list is a successful no-op.
    pub fn rewrite(&mut self, path: &str, targets: &[StyleDeclaration]) -> bool {
        if targets.is_empty() {
            return true;
        }
        let names: Vec<String> = targets.iter().map(|d| d.name.clone()).collect();
        match rewrite_path(path, &names, &self.create_object) {
            Ok(()) => {
                self.invalidate(path);
                true
            }
            Err(err) => {
                eprintln!("{} {}", "warning:".yellow().bold(), err);
                false
            }
        }
    }

    pub fn invalidate(&mut self, path: &str) {
        self.cache.remove(path);
    }

    pub fn take_parse_errors(&mut self) -> Vec<ParseErrorIssue> {
        std::mem::take(&mut self.parse_errors)
    }
}
