use super::{CommandResult, CommandSummary};
use crate::issues::Issue;

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    exit_on_findings: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let finding_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::UnusedStyle(_)))
        .count();

    CommandResult {
        summary,
        issues,
        finding_count,
        parse_error_count,
        source_files_checked,
        exit_on_findings,
    }
}
