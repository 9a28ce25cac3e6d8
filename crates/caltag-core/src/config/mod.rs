use std::str::FromStr;

use anyhow::Result;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::error::{CoreError, CoreResult};


#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub xml: XmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Parses the configured level into a `tracing` level filter.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the level is not a known
    /// `tracing` level name.
    pub fn level_filter(&self) -> CoreResult<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|e| {
            CoreError::InvalidConfiguration(format!("logging.level `{}`: {e}", self.level))
        })
    }
}

/// What to do when a tag is rendered for a namespace without a registered prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnregisteredNamespacePolicy {
    /// Render the bare local name and log a warning.
    #[default]
    Degrade,
    /// Refuse to render the tag.
    Reject,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct XmlConfig {
    #[serde(default)]
    pub unregistered_namespace: UnregisteredNamespacePolicy,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("CALTAG")
                    .convert_case(config::Case::Snake)
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from an inline TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document cannot be parsed or fails validation.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but are still unusable.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for an unknown log level.
    pub fn validate(&self) -> CoreResult<()> {
        self.logging.level_filter().map(|_| ())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("xml.unregistered_namespace", "degrade")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "Configuration loaded");
    Ok(settings)
}
