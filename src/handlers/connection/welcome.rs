//! RPL_WELCOME handler.

use async_trait::async_trait;
use slirc_proto::MessageRef;
use tracing::{info, warn};

use super::super::core::{Context, Handler};
use crate::error::HandlerResult;

/// Joins a fixed list of channels once the server accepts the login.
pub struct AutoJoinHandler {
    channels: Vec<String>,
}

impl AutoJoinHandler {
    pub fn new(channels: Vec<String>) -> Self {
        Self { channels }
    }

    pub fn channels(&self) -> &[String] {
        &self.channels
    }
}

#[async_trait]
impl Handler for AutoJoinHandler {
    async fn handle(&self, ctx: &mut Context, msg: &MessageRef<'_>) -> HandlerResult {
        info!(server = msg.source(), nick = %ctx.identity().nick, "registered");

        for channel in &self.channels {
            // One bad channel name does not stop the rest.
            if let Err(error) = ctx.join(channel).await {
                warn!(channel = %channel, error = %error, "auto-join failed");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::core::Identity;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn joins_each_channel_in_order() {
        let (ours, mut theirs) = tokio::io::duplex(512);
        let mut ctx = Context::new(Identity::new("bot", "localhost", 6667), 64);
        ctx.attach(Box::new(ours));

        let handler = AutoJoinHandler::new(vec![
            "#rust".into(),
            format!("#{}", "x".repeat(80)),
            "#tokio".into(),
        ]);
        let msg = MessageRef::parse(b":srv 001 bot :Welcome").unwrap();
        handler.handle(&mut ctx, &msg).await.unwrap();
        drop(ctx);

        let mut out = String::new();
        theirs.read_to_string(&mut out).await.unwrap();
        assert_eq!(out, "JOIN #rust\r\nJOIN #tokio\r\n");
    }
}
