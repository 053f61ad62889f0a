//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig, IdentityConfig)
//! - [`limits`]: Buffer size configuration (LimitsConfig)
//! - [`validation`]: Startup checks on a parsed config

mod limits;
mod types;
mod validation;

pub use limits::LimitsConfig;
pub use types::{ChannelsConfig, Config, ConfigError, IdentityConfig, ServerConfig};
pub use validation::{ValidationError, validate};
