use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::args::{self, Args};
use crate::command::Command;
use crate::error::{ArgCountMismatch, ParseError};

use super::MessageRef;

/// An owned message.
///
/// Produced by [`MessageRef::to_owned`] when a handler needs a message
/// after its dispatch pass has ended.
///
/// ```
/// use slirc_proto::{Command, Message};
///
/// let msg: Message = ":srv 001 me :Welcome".parse().unwrap();
/// assert_eq!(msg.command, Command::Numeric(1));
/// assert_eq!(msg.to_string(), ":srv 001 me :Welcome");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Prefix without its leading `:`.
    pub prefix: Option<String>,
    /// Command key.
    pub command: Command,
    /// Unsplit parameters.
    pub remainder: String,
}

impl Message {
    /// Build a message with no prefix.
    pub fn new(command: Command, remainder: impl Into<String>) -> Self {
        Self {
            prefix: None,
            command,
            remainder: remainder.into(),
        }
    }

    /// Set the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Extract at most `max` parameters from the remainder.
    pub fn args(&self, max: usize) -> Result<Args<'_>, ArgCountMismatch> {
        args::extract(&self.remainder, max)
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, ":{prefix} ")?;
        }
        write!(f, "{}", self.command)?;
        if !self.remainder.is_empty() {
            write!(f, " {}", self.remainder)?;
        }
        Ok(())
    }
}

impl FromStr for Message {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageRef::parse_str(s).map(|m| m.to_owned())
    }
}
