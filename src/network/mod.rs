//! Network module.
//!
//! Contains the Connection: socket setup, login and the read loop.

mod connection;

pub use connection::{Connection, Reader};
