//! Handler context and the `Handler` trait.
//!
//! [`Context`] is the half of a connection that handlers may touch: the
//! configured identity and the write side of the socket. Every outbound
//! command goes through [`Context::send_line`], which bounds the line and
//! writes it once.

use std::fmt;

use async_trait::async_trait;
use slirc_proto::{MessageRef, irc_eq};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{trace, warn};

pub use crate::error::{HandlerError, HandlerResult, SendError};
use crate::state::Role;

/// Default size of the outbound line buffer, CRLF included.
pub const DEFAULT_SEND_CAPACITY: usize = 1024;

/// Write half of the connection.
pub type Writer = Box<dyn AsyncWrite + Send + Unpin>;

/// Who we are and where we connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub nick: String,
    pub user: String,
    pub realname: String,
    pub password: Option<String>,
    pub server: String,
    pub port: u16,
}

impl Identity {
    /// Identity with `user` and `realname` both set to `nick`.
    pub fn new(nick: impl Into<String>, server: impl Into<String>, port: u16) -> Self {
        let nick = nick.into();
        Self {
            user: nick.clone(),
            realname: nick.clone(),
            nick,
            password: None,
            server: server.into(),
            port,
        }
    }
}

/// Handler context passed to each command handler.
pub struct Context {
    identity: Identity,
    writer: Option<Writer>,
    out_capacity: usize,
}

impl Context {
    /// Create a disconnected context.
    pub fn new(identity: Identity, out_capacity: usize) -> Self {
        Self {
            identity,
            writer: None,
            out_capacity,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Whether `nick` names us (RFC 1459 case mapping).
    pub fn is_me(&self, nick: &str) -> bool {
        irc_eq(&self.identity.nick, nick)
    }

    /// Size of the outbound line buffer, CRLF included.
    pub fn out_capacity(&self) -> usize {
        self.out_capacity
    }

    pub fn is_connected(&self) -> bool {
        self.writer.is_some()
    }

    /// Install the write half of a fresh connection.
    pub fn attach(&mut self, writer: Writer) {
        self.writer = Some(writer);
    }

    /// Remove the write half, returning it if there was one.
    pub fn detach(&mut self) -> Option<Writer> {
        self.writer.take()
    }

    /// Write `bytes` with a single write call. No retry.
    pub async fn send_raw(&mut self, bytes: &[u8]) -> Result<(), SendError> {
        let writer = self.writer.as_mut().ok_or(SendError::NotConnected)?;

        let written = writer.write(bytes).await?;
        if written != bytes.len() {
            return Err(SendError::ShortWrite {
                written,
                expected: bytes.len(),
            });
        }
        writer.flush().await?;

        trace!(len = written, line = %String::from_utf8_lossy(bytes).trim_end(), ">>");
        Ok(())
    }

    /// Render one command, append CRLF and send it.
    ///
    /// Rendering happens before the returned future is first polled, so
    /// `args` need not outlive the call.
    pub fn send_fmt<'s>(
        &'s mut self,
        args: fmt::Arguments<'_>,
    ) -> impl Future<Output = Result<(), SendError>> + Send + use<'s> {
        self.send_line(fmt::format(args))
    }

    /// Append CRLF to `line` and send it.
    ///
    /// A command that would not leave room for the CRLF in the output
    /// buffer is dropped with [`SendError::OversizedCommand`].
    pub async fn send_line(&mut self, mut line: String) -> Result<(), SendError> {
        let limit = self.out_capacity.saturating_sub(2);
        if line.len() >= limit {
            warn!(len = line.len(), limit, "dropping oversized command");
            return Err(SendError::OversizedCommand {
                len: line.len(),
                limit,
            });
        }

        line.push_str("\r\n");
        self.send_raw(line.as_bytes()).await
    }

    // ------------------------------------------------------------------
    // Outbound commands
    // ------------------------------------------------------------------

    pub async fn pass(&mut self, password: &str) -> Result<(), SendError> {
        self.send_line(format!("PASS {password}")).await
    }

    pub async fn nick(&mut self, nick: &str) -> Result<(), SendError> {
        self.send_line(format!("NICK {nick}")).await
    }

    /// `USER <user> hostname servername :<realname>`
    pub async fn user(&mut self, user: &str, realname: &str) -> Result<(), SendError> {
        self.send_line(format!("USER {user} hostname servername :{realname}")).await
    }

    /// `PONG` followed by `token` verbatim, or a bare `PONG`.
    pub async fn pong(&mut self, token: &str) -> Result<(), SendError> {
        if token.is_empty() {
            self.send_line("PONG".to_owned()).await
        } else {
            self.send_line(format!("PONG {token}")).await
        }
    }

    pub async fn join(&mut self, channel: &str) -> Result<(), SendError> {
        self.send_line(format!("JOIN {channel}")).await
    }

    pub async fn invite(&mut self, nick: &str, channel: &str) -> Result<(), SendError> {
        self.send_line(format!("INVITE {nick} {channel}")).await
    }

    /// Grant `role` to `nick` on `channel`. Only [`Role::Op`] is sent.
    pub async fn set_channel_user_mode(
        &mut self,
        channel: &str,
        nick: &str,
        role: Role,
    ) -> Result<(), SendError> {
        if role != Role::Op {
            return Ok(());
        }
        self.send_line(format!("MODE {channel} +o {nick}")).await
    }

    /// Revoke `role` from `nick` on `channel`. Only [`Role::Op`] is sent.
    pub async fn clear_channel_user_mode(
        &mut self,
        channel: &str,
        nick: &str,
        role: Role,
    ) -> Result<(), SendError> {
        if role != Role::Op {
            return Ok(());
        }
        self.send_line(format!("MODE {channel} -o {nick}")).await
    }

    pub async fn privmsg(&mut self, target: &str, text: &str) -> Result<(), SendError> {
        self.send_line(format!("PRIVMSG {target} :{text}")).await
    }

    /// PRIVMSG with a formatted body.
    pub fn privmsg_fmt<'s>(
        &'s mut self,
        target: &str,
        text: fmt::Arguments<'_>,
    ) -> impl Future<Output = Result<(), SendError>> + Send + use<'s> {
        self.send_line(format!("PRIVMSG {target} :{text}"))
    }
}

/// A command handler.
///
/// Handlers receive a [`MessageRef`] borrowed from the receive buffer. It
/// is valid for the duration of the call only; copy with
/// [`MessageRef::to_owned`] to keep anything.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, ctx: &mut Context, msg: &MessageRef<'_>) -> HandlerResult;
}
