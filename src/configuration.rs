use crate::domain::{Policy, PolicyError};
use crate::utils;
use serde::Deserialize;
use std::fmt::{self, Debug, Formatter};

#[derive(Deserialize, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub policy: Policy,
}

#[derive(thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to read configuration.")]
    Read(#[from] config::ConfigError),

    #[error(transparent)]
    InvalidPolicy(#[from] PolicyError),
}

impl Debug for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

/// Reads `config.yaml`, letting `NAMECHECK__POLICY__*` variables override it.
pub fn get_config() -> Result<Settings, ConfigurationError> {
    get_config_from("config.yaml")
}

pub fn get_config_from(path: &str) -> Result<Settings, ConfigurationError> {
    let configs = config::Config::builder()
        .add_source(config::File::new(path, config::FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix("NAMECHECK")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    validated(configs.try_deserialize::<Settings>()?)
}

/// Parses settings from an in-memory YAML document.
pub fn parse_config(yaml: &str) -> Result<Settings, ConfigurationError> {
    let configs = config::Config::builder()
        .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
        .build()?;

    validated(configs.try_deserialize::<Settings>()?)
}

fn validated(settings: Settings) -> Result<Settings, ConfigurationError> {
    settings.policy.validate()?;
    tracing::debug!(
        reserved_terms = settings.policy.reserved_terms.len(),
        safe_emoji = settings.policy.safe_emoji.len(),
        "Loaded policy"
    );
    Ok(settings)
}
