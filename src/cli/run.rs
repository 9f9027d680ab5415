use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, collect::collect, init::init},
};

/// Dispatches to the command handler for the parsed arguments.
///
/// With no subcommand the collect flags drive a collection run.
///
/// # Returns
/// - `Ok(CommandResult)` describing what was written
/// - `Err` if the command fails (e.g., invalid config, unwritable output)
pub fn run(Arguments { command, collect: args }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        None => collect(&args),
    }
}
