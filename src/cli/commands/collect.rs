use std::{
    env,
    fs::File,
    io::{self, BufWriter},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CollectArgs;
use super::{CollectReport, CommandResult, CommandSummary};
use crate::{
    collector::write_payload,
    config::{ConfigLoadResult, load_config},
};

/// Resolve options from config file and flags, then stream the payload to
/// its destination.
pub fn collect(args: &CollectArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let ConfigLoadResult { mut config, path } = load_config(&cwd)?;
    match &path {
        Some(path) => debug!("loaded config from {}", path.display()),
        None => debug!("no config file found, using defaults"),
    }

    args.apply_to(&mut config);
    config.validate()?;

    let options = config.collect_options();
    debug!(?options, "collecting");

    let summary = if config.output_is_stdout() {
        let mut stdout = io::stdout().lock();
        write_payload(&options, &mut stdout)?
    } else {
        let file = File::create(&config.output)
            .with_context(|| format!("Failed to create output file: {}", config.output))?;
        let mut writer = BufWriter::new(file);
        write_payload(&options, &mut writer)
            .with_context(|| format!("Failed to write output file: {}", config.output))?
    };

    Ok(CommandResult {
        summary: CommandSummary::Collect(CollectReport {
            root: config.root,
            output: config.output,
            summary,
        }),
    })
}
