use std::collections::HashSet;

use anyhow::{Ok, Result};
use rayon::prelude::*;

use super::super::args::CheckCommand;
use super::super::context::ProjectContext;
use super::helper::finish;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::engine::Scanner;
use crate::issues::{Issue, UnusedStyleIssue};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;

    // Files are independent, so each worker gets its own scanner.
    let per_file: Vec<Vec<Issue>> = ctx
        .files
        .par_iter()
        .map(|file| {
            let mut scanner = Scanner::new(&ctx.config.create_object);
            let mut issues: Vec<Issue> = Vec::new();

            if let Some(result) = scanner.scan_one(file) {
                issues.extend(
                    result
                        .unused
                        .iter()
                        .map(|d| Issue::UnusedStyle(UnusedStyleIssue::from_declaration(file, d))),
                );
            }
            issues.extend(scanner.take_parse_errors().into_iter().map(Issue::ParseError));
            issues
        })
        .collect();

    let all_issues: Vec<Issue> = per_file.into_iter().flatten().collect();

    let unused_files: HashSet<&str> = all_issues
        .iter()
        .filter_map(|issue| match issue {
            Issue::UnusedStyle(i) => Some(i.context.location.file_path.as_str()),
            _ => None,
        })
        .collect();
    let unused_count = all_issues
        .iter()
        .filter(|i| matches!(i, Issue::UnusedStyle(_)))
        .count();

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            unused_count,
            file_count: unused_files.len(),
        }),
        all_issues,
        ctx.files.len(),
        true,
    ))
}
