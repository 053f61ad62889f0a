//! PING handler.

use async_trait::async_trait;
use slirc_proto::MessageRef;

use super::super::core::{Context, Handler};
use crate::error::HandlerResult;

/// Handler for PING command.
///
/// Registered on every connection. Replies with `PONG` followed by the
/// PING's parameters exactly as received.
pub struct PingHandler;

#[async_trait]
impl Handler for PingHandler {
    async fn handle(&self, ctx: &mut Context, msg: &MessageRef<'_>) -> HandlerResult {
        // PING :<token>
        ctx.pong(msg.remainder).await?;
        Ok(())
    }
}
