use std::path::PathBuf;

use crate::collector::CollectSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Collect(CollectReport),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CollectReport {
    pub root: String,
    /// Output path, or "-" when the payload went to stdout.
    pub output: String,
    pub summary: CollectSummary,
}

impl CollectReport {
    pub fn to_stdout(&self) -> bool {
        self.output == crate::config::STDOUT_OUTPUT
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a payload command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
