pub mod check;
pub mod clean;
mod command_result;
pub mod helper;

pub use command_result::*;
