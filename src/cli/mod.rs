use anyhow::Result;

use crate::cli::exit_code::exit_code_from_result;

mod args;
mod commands;
mod context;
mod exit_code;
mod report;
mod run;

pub use args::{Arguments, CheckCommand, CleanCommand, Command, CommonArgs};

pub fn run_cli(args: Arguments) -> Result<u8> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(0);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_code_from_result(&result))
}
