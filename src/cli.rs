//! Command-line overrides for the configuration file.

use std::path::PathBuf;

use clap::Parser;

use crate::api::Mode;
use crate::config::{Config, ConfigError};

#[derive(Debug, Clone, Parser)]
#[command(name = "summarize-form", version, about = "Terminal form for a text summarization server")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the summarization server (e.g. http://127.0.0.1:5000)
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Initial summarization mode
    #[arg(long, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Initial sentence count for extractive mode
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub length: Option<u32>,
}

impl Cli {
    /// Load the config file, then apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(server) = &self.server {
            config.server.base_url = server.clone();
        }
        if let Some(mode) = self.mode {
            config.form.mode = mode;
        }
        if let Some(length) = self.length {
            config.form.length = length;
        }
    }
}
