//! slirc-client - Straylight IRC client engine.
//!
//! Owns one socket connection, frames the byte stream into CRLF lines over
//! a fixed receive buffer, and dispatches each parsed message to a handler
//! keyed by command word or numeric reply. Channel rosters are kept by a
//! [`ChannelTracker`] built on the same dispatch mechanism.
//!
//! ```no_run
//! use slirc_client::{ChannelTracker, Connection, Identity};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut conn = Connection::new(Identity::new("slircc", "irc.libera.chat", 6667), 2048, 1024);
//! let tracker = ChannelTracker::new();
//! tracker.track("#rust");
//! tracker.attach(conn.registry_mut())?;
//!
//! conn.connect().await?;
//! conn.context_mut().join("#rust").await?;
//! conn.run().await?;
//!
//! println!("{:?}", tracker.roster("#rust").map(|r| r.len()));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod network;
pub mod state;

pub use config::Config;
pub use error::{
    ConnectionError, DispatchError, HandlerError, HandlerResult, RegistryError, SendError,
};
pub use handlers::{AutoJoinHandler, Context, Handler, Identity, Registry};
pub use network::Connection;
pub use state::{ChannelRoster, ChannelTracker, Role, RosterState};

pub use slirc_proto as proto;
