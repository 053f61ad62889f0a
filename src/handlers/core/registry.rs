//! Operation registry and dispatch.
//!
//! One map from [`Command`] to handler. Numeric and word keys are distinct
//! enum variants, so `001` and a word can never collide. Words match
//! byte-exactly; `privmsg` does not reach a `PRIVMSG` handler.

use std::collections::HashMap;

use slirc_proto::{Command, MessageRef, numeric};
use tracing::{Instrument, Level, debug, span};

use super::context::{Context, Handler};
use crate::error::{DispatchError, RegistryError};

/// Registry of command handlers.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<Command, Box<dyn Handler>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `key`.
    ///
    /// Fails if `key` already has a handler, or if no parsed line could
    /// ever produce it.
    pub fn register(
        &mut self,
        key: Command,
        handler: Box<dyn Handler>,
    ) -> Result<(), RegistryError> {
        if !key.is_valid() {
            return Err(RegistryError::InvalidKey(key));
        }
        if self.handlers.contains_key(&key) {
            return Err(RegistryError::DuplicateOperation(key));
        }
        debug!(command = %key, "registered operation");
        self.handlers.insert(key, handler);
        Ok(())
    }

    /// Install a handler the connection itself provides. `key` must be a
    /// valid, unregistered key.
    pub(crate) fn insert_builtin(&mut self, key: Command, handler: Box<dyn Handler>) {
        debug_assert!(key.is_valid() && !self.handlers.contains_key(&key));
        self.handlers.insert(key, handler);
    }

    /// Remove the handler for `key`, handing it back to the caller.
    pub fn unregister(&mut self, key: &Command) -> Option<Box<dyn Handler>> {
        let handler = self.handlers.remove(key);
        if handler.is_some() {
            debug!(command = %key, "unregistered operation");
        }
        handler
    }

    pub fn contains(&self, key: &Command) -> bool {
        self.handlers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &Command> {
        self.handlers.keys()
    }

    /// Dispatch a message to the handler registered for its command.
    pub async fn dispatch(
        &self,
        ctx: &mut Context,
        msg: &MessageRef<'_>,
    ) -> Result<(), DispatchError> {
        let key = msg.command.to_owned();

        let Some(handler) = self.handlers.get(&key) else {
            return Err(DispatchError::UnknownCommand(key));
        };

        let irc_span = span!(
            Level::DEBUG,
            "irc.command",
            command = %key,
            reply = msg.command.numeric().and_then(numeric::name),
            prefix = msg.prefix,
        );

        handler
            .handle(ctx, msg)
            .instrument(irc_span)
            .await
            .map_err(|source| DispatchError::Handler { key, source })
    }
}
