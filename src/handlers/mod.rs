//! IRC command handlers.
//!
//! This module contains the Handler trait and command registry for dispatching
//! incoming IRC messages to appropriate handlers.
//!
//! ## Zero-Copy Architecture
//!
//! Handlers receive `MessageRef<'_>` which borrows directly from the receive
//! buffer, avoiding allocations in the hot loop. Use `msg.args(n)` to access
//! arguments as `&str` slices.

mod channel;
mod connection;
pub mod core;

pub use self::core::{Context, DEFAULT_SEND_CAPACITY, Handler, Identity, Registry, Writer};
pub use channel::{EndOfNamesHandler, JoinHandler, NamReplyHandler, PartHandler};
pub use connection::{AutoJoinHandler, PingHandler};
