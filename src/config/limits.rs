//! Buffer size configuration.

use serde::Deserialize;
use slirc_proto::DEFAULT_RECV_CAPACITY;

use crate::handlers::DEFAULT_SEND_CAPACITY;

/// Receive and send buffer sizes.
///
/// A line longer than `recv_buffer` cannot be framed and ends the
/// connection; a command longer than `send_buffer - 2` is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    /// Receive buffer capacity in bytes (default: 2048).
    #[serde(default = "default_recv_buffer")]
    pub recv_buffer: usize,
    /// Outbound line capacity in bytes, CRLF included (default: 1024).
    #[serde(default = "default_send_buffer")]
    pub send_buffer: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            recv_buffer: default_recv_buffer(),
            send_buffer: default_send_buffer(),
        }
    }
}

fn default_recv_buffer() -> usize {
    DEFAULT_RECV_CAPACITY
}

fn default_send_buffer() -> usize {
    DEFAULT_SEND_CAPACITY
}
