//! Error types for the IRC protocol core.
//!
//! Three independent failure domains live here:
//! - [`FrameError`]: the receive buffer could not accept more bytes.
//! - [`ParseError`]: a single line could not be split into prefix/command/remainder.
//! - [`ArgCountMismatch`]: a remainder did not yield the expected parameters.
//!
//! Parse and argument failures are local to one message. A frame error is not.

use thiserror::Error;

/// Convenience type alias for parse results.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Extract the command word from a raw line (for error reporting).
///
/// Works on raw bytes so a command can still be named when the rest of the
/// line is not valid UTF-8.
///
/// ```ignore
/// assert_eq!(extract_command_hint(b"PRIVMSG #test hi"), Some("PRIVMSG".to_string()));
/// assert_eq!(extract_command_hint(b":server 353 me = #c :a"), Some("353".to_string()));
/// ```
pub(crate) fn extract_command_hint(raw_line: &[u8]) -> Option<String> {
    let mut pos = 0;

    // Skip prefix: :server or :nick!user@host (terminated by space)
    if raw_line.first() == Some(&b':') {
        while pos < raw_line.len() && raw_line[pos] != b' ' {
            pos += 1;
        }
        while pos < raw_line.len() && raw_line[pos] == b' ' {
            pos += 1;
        }
    }

    let cmd_start = pos;
    while pos < raw_line.len() && raw_line[pos].is_ascii_alphanumeric() {
        pos += 1;
    }

    if pos > cmd_start {
        String::from_utf8(raw_line[cmd_start..pos].to_vec()).ok()
    } else {
        None
    }
}

/// The receive buffer cannot take the offered bytes.
///
/// Raised when a peer sends more than `capacity` bytes without a line
/// terminator. The connection treats this as a fatal protocol error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FrameError {
    /// Appending would push the buffer past its capacity.
    #[error("receive buffer overflow: {pending} pending + {incoming} incoming > {capacity}")]
    BufferOverflow {
        /// Unconsumed bytes already held.
        pending: usize,
        /// Bytes offered to `feed`.
        incoming: usize,
        /// Fixed buffer capacity.
        capacity: usize,
    },
}

/// Errors encountered when splitting one line into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The line was zero bytes long.
    #[error("empty message")]
    EmptyMessage,

    /// The line is not valid UTF-8.
    #[error("invalid UTF-8 in message at byte {byte_pos}: {details}")]
    InvalidUtf8 {
        /// Byte position where validation failed.
        byte_pos: usize,
        /// Decoder message.
        details: String,
        /// Command word recovered from the raw bytes, if any.
        command_hint: Option<String>,
    },

    /// A `:` prefix with no space after it.
    #[error("malformed prefix: no space after ':source'")]
    MalformedPrefix,

    /// Command is neither three digits nor a run of letters.
    #[error("unparsable command: {0:?}")]
    UnparsableCommand(String),
}

impl ParseError {
    /// Static code for log labelling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "empty_message",
            Self::InvalidUtf8 { .. } => "invalid_utf8",
            Self::MalformedPrefix => "malformed_prefix",
            Self::UnparsableCommand(_) => "unparsable_command",
        }
    }
}

/// A remainder did not split into the requested parameters.
///
/// Either bytes were left over once `max` parameters were taken, or fewer
/// parameters than required were present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("argument count mismatch: parsed {parsed} of at most {max}, {unconsumed} bytes left")]
pub struct ArgCountMismatch {
    /// Parameter limit (or required count) that was asked for.
    pub max: usize,
    /// Parameters successfully taken before the failure.
    pub parsed: usize,
    /// Bytes of the remainder left unconsumed.
    pub unconsumed: usize,
}
