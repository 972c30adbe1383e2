use anyhow::{Ok, Result};

use super::super::args::CleanCommand;
use super::super::context::ProjectContext;
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::engine::{Scanner, StyleDeclaration};
use crate::issues::{Issue, UnusedStyleIssue};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let apply = cmd.apply;

    // Sequential on purpose: rewrites mutate files, and one scanner keeps
    // its cache consistent across the scan and rewrite phases.
    let mut scanner =
        Scanner::new(&ctx.config.create_object).with_ignore(ctx.ignore_predicate());

    let mut targets: Vec<(String, Vec<StyleDeclaration>)> = Vec::new();
    for file in &ctx.files {
        if let Some(result) = scanner.scan_one(file)
            && !result.unused.is_empty()
        {
            targets.push((file.clone(), result.unused));
        }
    }

    let unused_count: usize = targets.iter().map(|(_, unused)| unused.len()).sum();
    let file_count = targets.len();

    let mut removed_count = 0;
    let mut failed_count = 0;
    if apply {
        for (file, unused) in &targets {
            // A failed file is reported and skipped; the rest still get cleaned.
            if scanner.rewrite(file, unused) {
                removed_count += unused.len();
            } else {
                failed_count += 1;
            }
        }
    }

    let unused_issues: Vec<UnusedStyleIssue> = targets
        .iter()
        .flat_map(|(file, unused)| {
            unused
                .iter()
                .map(|d| UnusedStyleIssue::from_declaration(file, d))
        })
        .collect();

    let mut all_issues: Vec<Issue> = unused_issues
        .iter()
        .cloned()
        .map(Issue::UnusedStyle)
        .collect();
    all_issues.extend(scanner.take_parse_errors().into_iter().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            unused_count,
            file_count,
            removed_count,
            failed_count,
            is_apply: apply,
            unused_issues,
        }),
        all_issues,
        ctx.files.len(),
        false,
    ))
}
