//! Configuration API for graphematization

use crate::api::Error;
use crate::domain::TrailingDash;
use std::str::FromStr;

/// Processing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) trailing_dash: TrailingDash,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Trailing-dash policy the grammar is built with
    pub fn trailing_dash(&self) -> TrailingDash {
        self.trailing_dash
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    trailing_dash: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trailing-dash policy by name (`reject` or `discard`)
    pub fn trailing_dash(mut self, policy: impl Into<String>) -> Self {
        self.trailing_dash = Some(policy.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(policy) = self.trailing_dash {
            config.trailing_dash = TrailingDash::from_str(&policy)?;
        }

        Ok(config)
    }
}

impl FromStr for TrailingDash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(TrailingDash::Reject),
            "discard" => Ok(TrailingDash::Discard),
            other => Err(Error::Configuration(format!(
                "unknown trailing dash policy '{other}' (expected 'reject' or 'discard')"
            ))),
        }
    }
}
