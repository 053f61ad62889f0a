//! Unified error handling for slirc-client.
//!
//! Failures fall into two groups. Message-local ones ([`HandlerError`],
//! [`DispatchError`], and the parse errors from `slirc_proto`) are logged
//! and cost only the offending line. Connection-level ones
//! ([`ConnectionError`]) end the read loop or abort `connect()`.

use std::io;
use std::net::SocketAddr;

use slirc_proto::{ArgCountMismatch, Command, FrameError};
use thiserror::Error;

// ============================================================================
// Send Errors (outbound primitives)
// ============================================================================

/// Errors from the outbound send primitives.
///
/// None of these tear the connection down; the caller decides.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("not connected")]
    NotConnected,

    #[error("write failed: {0}")]
    WriteFailure(#[from] io::Error),

    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    /// Dropped before sending; never truncated or split.
    #[error("command of {len} bytes does not fit the {limit}-byte output buffer")]
    OversizedCommand { len: usize, limit: usize },
}

impl SendError {
    /// Get a static error code string for log labelling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotConnected => "not_connected",
            Self::WriteFailure(_) => "write_failure",
            Self::ShortWrite { .. } => "short_write",
            Self::OversizedCommand { .. } => "oversized_command",
        }
    }
}

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors a handler can return for one message.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Args(#[from] ArgCountMismatch),

    #[error("message has no nick!user@host source")]
    MissingSource,

    #[error("send error: {0}")]
    Send(#[from] SendError),
}

impl HandlerError {
    /// Get a static error code string for log labelling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Args(_) => "arg_count_mismatch",
            Self::MissingSource => "missing_source",
            Self::Send(e) => e.error_code(),
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Why a parsed message was not handled.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown command: {0}")]
    UnknownCommand(Command),

    #[error("{key} handler failed: {source}")]
    Handler {
        key: Command,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// Get a static error code string for log labelling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "unknown_command",
            Self::Handler { source, .. } => source.error_code(),
        }
    }
}

/// Registration rejected by the operation registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("an operation is already registered for {0}")]
    DuplicateOperation(Command),

    #[error("{0} can never match a received command")]
    InvalidKey(Command),
}

impl RegistryError {
    /// Get a static error code string for log labelling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateOperation(_) => "duplicate_operation",
            Self::InvalidKey(_) => "invalid_key",
        }
    }
}

// ============================================================================
// Connection Errors
// ============================================================================

/// Errors that end connection setup or the read loop.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("could not resolve {host}:{port}: {source}")]
    ResolveFailure {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("could not connect to {addr}: {source}")]
    ConnectFailure {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The server filled the receive buffer without sending a line
    /// terminator. Fatal: the connection is closed.
    #[error("protocol error: {0}")]
    BufferOverflow(#[from] FrameError),

    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("not connected")]
    NotConnected,

    #[error("login failed: {0}")]
    Send(#[from] SendError),
}

impl ConnectionError {
    /// Get a static error code string for log labelling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ResolveFailure { .. } => "resolve_failure",
            Self::ConnectFailure { .. } => "connect_failure",
            Self::BufferOverflow(_) => "buffer_overflow",
            Self::Read(_) => "read_failure",
            Self::NotConnected => "not_connected",
            Self::Send(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_error_codes_follow_source() {
        let err = HandlerError::from(SendError::OversizedCommand {
            len: 1100,
            limit: 1022,
        });
        assert_eq!(err.error_code(), "oversized_command");

        let err = DispatchError::Handler {
            key: Command::Word("JOIN".into()),
            source: HandlerError::MissingSource,
        };
        assert_eq!(err.error_code(), "missing_source");
        assert_eq!(
            err.to_string(),
            "JOIN handler failed: message has no nick!user@host source"
        );
    }

    #[test]
    fn unknown_command_display_uses_wire_form() {
        let err = DispatchError::UnknownCommand(Command::Numeric(5));
        assert_eq!(err.to_string(), "unknown command: 005");
    }

    #[test]
    fn buffer_overflow_converts_from_frame_error() {
        let frame = FrameError::BufferOverflow {
            pending: 2048,
            incoming: 0,
            capacity: 2048,
        };
        let err = ConnectionError::from(frame);
        assert_eq!(err.error_code(), "buffer_overflow");
    }
}
