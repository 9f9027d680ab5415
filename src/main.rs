use std::process::ExitCode;

use clap::Parser;
use payload::cli::{Arguments, ExitStatus};
use tracing::Level;

fn main() -> ExitCode {
    let args = Arguments::parse();

    // Logs go to stderr so `--output -` can stream the payload on stdout.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose() {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match payload::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
