use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const ENV_PREFIX: &str = "APOSTLES";
const SETTINGS_FILE: &str = "apostles";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Raw scraped text.
    pub input: PathBuf,
    /// JSON destination; stdout when unset.
    pub output: Option<PathBuf>,
    pub log_filter: String,
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input: PathBuf::from("raw_data.txt"),
            output: None,
            log_filter: "info".to_string(),
            pretty: true,
        }
    }
}

impl Settings {
    /// Defaults, then `apostles.toml` if present, then `APOSTLES_*` variables.
    pub fn load() -> Result<Self> {
        Self::build(
            Config::builder()
                .add_source(File::with_name(SETTINGS_FILE).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX)),
        )
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let defaults = Settings::default();
        let settings = builder
            .set_default("input", defaults.input.to_string_lossy().into_owned())?
            .set_default("log_filter", defaults.log_filter)?
            .set_default("pretty", defaults.pretty)?
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
