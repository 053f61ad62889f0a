//! # slirc-proto
//!
//! Sans-I/O core of an IRC client: CRLF framing over a fixed receive
//! buffer, zero-copy message splitting, parameter extraction and the
//! command keys a dispatcher is built on.
//!
//! Nothing here touches a socket. Bytes go into a [`LineBuffer`]; complete
//! lines come out as slices borrowed from it and are parsed into
//! [`MessageRef`] views of the same memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_proto::{CommandRef, LineBuffer, MessageRef, Privmsg};
//!
//! let mut framer = LineBuffer::new();
//! framer.feed(b":a!b@c PRIVMSG alice,#rust :hello world\r\nPING :srv\r\n").unwrap();
//!
//! for line in framer.drain() {
//!     let msg = MessageRef::parse(line).unwrap();
//!     if msg.command == CommandRef::Word("PRIVMSG") {
//!         let pm = Privmsg::parse(msg.source(), msg.remainder).unwrap();
//!         assert_eq!(pm.targets.collect::<Vec<_>>(), ["alice", "#rust"]);
//!         assert_eq!(pm.text, "hello world");
//!     }
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod args;
pub mod casemap;
pub mod command;
pub mod error;
pub mod line;
pub mod message;
pub mod numeric;
pub mod prefix;

pub use self::args::{extract, extract_exact, extract_last, Args, CommaList, SpaceList};
pub use self::casemap::{irc_eq, irc_lower_byte, irc_lower_char, irc_to_lower};
pub use self::command::{Command, CommandRef, Kick, NamesReply, Privmsg, MAX_NUMERIC};
pub use self::error::{ArgCountMismatch, FrameError, ParseError};
pub use self::line::{LineBuffer, Lines, DEFAULT_RECV_CAPACITY};
pub use self::message::{Message, MessageRef};
pub use self::prefix::{nick_before_bang, PrefixRef};
