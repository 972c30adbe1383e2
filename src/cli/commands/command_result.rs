use crate::issues::{Issue, UnusedStyleIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub unused_count: usize,
    /// Number of files with at least one unused style.
    pub file_count: usize,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub unused_count: usize,
    /// Number of files with at least one unused style.
    pub file_count: usize,
    /// Styles actually removed (0 on dry-run).
    pub removed_count: usize,
    /// Files whose rewrite failed.
    pub failed_count: usize,
    pub is_apply: bool,
    pub unused_issues: Vec<UnusedStyleIssue>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// All issues found, sorted by file/line/col.
    pub issues: Vec<Issue>,
    /// Number of unused-style findings (parse errors excluded).
    pub finding_count: usize,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were scanned.
    pub source_files_checked: usize,
    /// If true, exit code 1 should be returned when finding_count > 0.
    /// If false, always exit 0 (used for commands that report work to do).
    pub exit_on_findings: bool,
}
