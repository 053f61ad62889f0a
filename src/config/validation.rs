//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Smallest receive buffer accepted; RFC 1459 lines are up to 512 bytes.
pub const MIN_RECV_BUFFER: usize = 512;
/// Smallest send buffer accepted.
pub const MIN_SEND_BUFFER: usize = 64;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("identity.nick is required")]
    MissingNick,
    #[error("server.host is required")]
    MissingHost,
    #[error("server.port must not be 0")]
    ZeroPort,
    #[error("limits.recv_buffer must be at least {}, got {}", MIN_RECV_BUFFER, .0)]
    RecvBufferTooSmall(usize),
    #[error("limits.send_buffer must be at least {}, got {}", MIN_SEND_BUFFER, .0)]
    SendBufferTooSmall(usize),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Required fields
    if config.identity.nick.is_empty() {
        errors.push(ValidationError::MissingNick);
    }
    if config.server.host.is_empty() {
        errors.push(ValidationError::MissingHost);
    }
    if config.server.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    // Buffers
    if config.limits.recv_buffer < MIN_RECV_BUFFER {
        errors.push(ValidationError::RecvBufferTooSmall(config.limits.recv_buffer));
    }
    if config.limits.send_buffer < MIN_SEND_BUFFER {
        errors.push(ValidationError::SendBufferTooSmall(config.limits.send_buffer));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_valid_config() -> String {
        r#"
[server]
host = "irc.example.org"

[identity]
nick = "slircc"
"#
        .to_string()
    }

    #[test]
    fn test_valid_config_passes() {
        let config: Config = toml::from_str(&minimal_valid_config()).unwrap();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_nick_fails() {
        let toml = r#"
[server]
host = "irc.example.org"

[identity]
nick = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors, [ValidationError::MissingNick]);
    }

    #[test]
    fn test_all_errors_are_reported() {
        let toml = r#"
[server]
host = "irc.example.org"
port = 0

[identity]
nick = "bot"

[limits]
recv_buffer = 100
send_buffer = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(
            errors,
            [
                ValidationError::ZeroPort,
                ValidationError::RecvBufferTooSmall(100),
                ValidationError::SendBufferTooSmall(10),
            ]
        );

        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("invalid config: server.port must not be 0; "));
    }
}
