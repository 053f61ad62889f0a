//! Integration test common infrastructure.
//!
//! Provides a scripted fake IRC server and helpers for building client
//! connections against it.

pub mod server;

#[allow(unused_imports)]
pub use server::{FakeServer, Peer};

use slirc_client::{Connection, Identity};

/// A connection to `server` with the default buffer sizes.
#[allow(dead_code)]
pub fn client_for(server: &FakeServer, nick: &str) -> Connection {
    let identity = Identity::new(nick, "127.0.0.1", server.port());
    Connection::new(identity, 2048, 1024)
}
