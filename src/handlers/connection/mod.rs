//! Connection keep-alive and registration handlers.
//!
//! Handles PING and RPL_WELCOME (001).

mod ping;
mod welcome;

pub use ping::PingHandler;
pub use welcome::AutoJoinHandler;
