use super::commands::CommandResult;

pub fn exit_code_from_result(result: &CommandResult) -> u8 {
    if result.exit_on_findings && result.finding_count > 0 {
        1
    } else {
        0
    }
}
