//! CLI argument definitions using clap.
//!
//! Running `payload` with no subcommand collects files using the config
//! file and the flags below. `payload init` writes a default config file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    collector::{Decode, normalize_extension},
    config::Config,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub collect: CollectArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Init) => false,
            None => self.collect.verbose,
        }
    }
}

/// Options for a collection run. Each one overrides the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct CollectArgs {
    /// Directory to scan
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// File to write the payload to ("-" for stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Accepted file extension, leading dot optional
    /// Can be specified multiple times: --ext md --ext rs
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Skip files whose path contains this substring
    /// Can be specified multiple times: --exclude node_modules --exclude target
    #[arg(long = "exclude", value_name = "SUBSTR", conflicts_with = "no_excludes")]
    pub excludes: Vec<String>,

    /// Do not skip any path by substring
    #[arg(long)]
    pub no_excludes: bool,

    /// Skip files of this many bytes or more
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<u64>,

    /// How to handle bytes that are not valid UTF-8
    #[arg(long, value_enum)]
    pub decode: Option<Decode>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CollectArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(root) = &self.root {
            config.root = root.to_string_lossy().into_owned();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if !self.extensions.is_empty() {
            config.extensions = self
                .extensions
                .iter()
                .map(|e| normalize_extension(e))
                .collect();
        }
        if self.no_excludes {
            config.excludes.clear();
        } else if !self.excludes.is_empty() {
            config.excludes = self.excludes.clone();
        }
        if let Some(max_size) = self.max_size {
            config.max_file_size = max_size;
        }
        if let Some(decode) = self.decode {
            config.decode = decode;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .payloadrc.json configuration file
    Init,
}
