//! Core configuration types and loading.

use std::path::Path;

use serde::Deserialize;
use slirc_proto::irc_eq;
use thiserror::Error;

use super::limits::LimitsConfig;
use super::validation::{self, ValidationError};
use crate::handlers::Identity;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server to connect to.
    pub server: ServerConfig,
    /// Who we register as.
    pub identity: IdentityConfig,
    /// Channels to join and to track.
    #[serde(default)]
    pub channels: ChannelsConfig,
    /// Buffer sizes.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check the config, collecting every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self).map_err(ConfigError::Invalid)
    }

    /// The identity and server a connection is made with.
    pub fn identity(&self) -> Identity {
        Identity::from(self)
    }
}

/// Server address configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Hostname or address (e.g., "irc.libera.chat").
    pub host: String,
    /// Port (default: 6667).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    6667
}

/// Registration identity.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    pub nick: String,
    /// Username sent in USER (default: the nick).
    pub user: Option<String>,
    /// Real name sent in USER (default: the nick).
    pub realname: Option<String>,
    /// Connection password, sent with PASS when set.
    pub password: Option<String>,
}

/// Channel lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelsConfig {
    /// Joined once the server sends RPL_WELCOME.
    #[serde(default)]
    pub join: Vec<String>,
    /// Rosters kept for these. They are joined too.
    #[serde(default)]
    pub track: Vec<String>,
}

impl ChannelsConfig {
    /// Every channel to join: `join` followed by any `track` entries not
    /// already listed, compared case-insensitively.
    pub fn autojoin_list(&self) -> Vec<String> {
        let mut list: Vec<String> = Vec::with_capacity(self.join.len() + self.track.len());
        for channel in self.join.iter().chain(&self.track) {
            if !list.iter().any(|c| irc_eq(c, channel)) {
                list.push(channel.clone());
            }
        }
        list
    }
}

impl From<&Config> for Identity {
    fn from(config: &Config) -> Self {
        let id = &config.identity;
        Self {
            nick: id.nick.clone(),
            user: id.user.clone().unwrap_or_else(|| id.nick.clone()),
            realname: id.realname.clone().unwrap_or_else(|| id.nick.clone()),
            password: id.password.clone(),
            server: config.server.host.clone(),
            port: config.server.port,
        }
    }
}
