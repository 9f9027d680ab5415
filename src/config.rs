use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::collector::{
    CollectOptions, DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS, DEFAULT_MAX_FILE_SIZE, Decode,
    ExtensionSet,
};

pub const CONFIG_FILE_NAME: &str = ".payloadrc.json";

pub const DEFAULT_OUTPUT: &str = "payload.txt";

/// Output path meaning "write to stdout".
pub const STDOUT_OUTPUT: &str = "-";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    #[serde(default)]
    pub decode: Decode,
}

fn default_root() -> String {
    ".".to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
            extensions: default_extensions(),
            excludes: default_excludes(),
            max_file_size: default_max_file_size(),
            decode: Decode::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.root.is_empty() {
            bail!("'root' must not be empty");
        }
        if self.output.is_empty() {
            bail!("'output' must not be empty");
        }
        for ext in &self.extensions {
            // "." alone would only ever match names ending in a bare dot
            if ext.is_empty() || ext == "." {
                bail!("Invalid extension in 'extensions': \"{}\"", ext);
            }
        }
        if self.excludes.iter().any(String::is_empty) {
            // An empty substring is contained in every path.
            bail!("Empty string in 'excludes' would exclude every file");
        }
        if self.max_file_size == 0 {
            bail!("'maxFileSize' must be greater than 0");
        }
        Ok(())
    }

    pub fn output_is_stdout(&self) -> bool {
        self.output == STDOUT_OUTPUT
    }

    /// Options for one collection run, skipping the output file when there
    /// is one.
    pub fn collect_options(&self) -> CollectOptions {
        let options = CollectOptions {
            root: PathBuf::from(&self.root),
            extensions: ExtensionSet::new(&self.extensions),
            excludes: self.excludes.clone(),
            max_file_size: self.max_file_size,
            decode: self.decode,
            skip_path: None,
        };
        if self.output_is_stdout() {
            options
        } else {
            options.with_skip_path(&self.output)
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
