//! Core handler infrastructure: the per-connection context, the `Handler`
//! trait and the registry that dispatches to it.

pub mod context;
pub mod registry;

pub use context::{Context, DEFAULT_SEND_CAPACITY, Handler, Identity, Writer};
pub use registry::Registry;
