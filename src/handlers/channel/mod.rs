//! Channel user tracker handlers.
//!
//! Consumes RPL_NAMREPLY, RPL_ENDOFNAMES, JOIN and PART to keep the
//! rosters of a [`ChannelTracker`] current. KICK is not consumed.

mod join;
mod names;
mod part;

pub use join::JoinHandler;
pub use names::{EndOfNamesHandler, NamReplyHandler};
pub use part::PartHandler;

use slirc_proto::{ArgCountMismatch, Command, CommaList, MessageRef, nick_before_bang, numeric};

use super::core::Registry;
use crate::error::{HandlerError, RegistryError};
use crate::state::ChannelTracker;

impl ChannelTracker {
    /// Register the tracker's handlers on `registry`.
    ///
    /// Either all four keys are registered or none are.
    pub fn attach(&self, registry: &mut Registry) -> Result<(), RegistryError> {
        let keys = tracker_keys();
        if let Some(taken) = keys.iter().find(|k| registry.contains(k)) {
            return Err(RegistryError::DuplicateOperation(taken.clone()));
        }

        let [names, end, join, part] = keys;
        registry.register(names, Box::new(NamReplyHandler::new(self.clone())))?;
        registry.register(end, Box::new(EndOfNamesHandler::new(self.clone())))?;
        registry.register(join, Box::new(JoinHandler::new(self.clone())))?;
        registry.register(part, Box::new(PartHandler::new(self.clone())))?;
        Ok(())
    }
}

fn tracker_keys() -> [Command; 4] {
    [
        Command::Numeric(numeric::RPL_NAMREPLY),
        Command::Numeric(numeric::RPL_ENDOFNAMES),
        Command::Word("JOIN".to_owned()),
        Command::Word("PART".to_owned()),
    ]
}

/// Nick of the user a JOIN or PART is about.
fn source_nick<'a>(msg: &MessageRef<'a>) -> Result<&'a str, HandlerError> {
    msg.prefix
        .and_then(nick_before_bang)
        .ok_or(HandlerError::MissingSource)
}

/// Channels named by the first parameter of a JOIN or PART.
fn channel_list<'a>(msg: &MessageRef<'a>) -> Result<CommaList<'a>, HandlerError> {
    // Extended JOIN and PART reasons add up to two more parameters.
    let args = msg.args(3)?;
    args.first()
        .copied()
        .map(CommaList::new)
        .ok_or(HandlerError::Args(ArgCountMismatch {
            max: 1,
            parsed: 0,
            unconsumed: 0,
        }))
}
