//! JOIN handler.

use async_trait::async_trait;
use slirc_proto::MessageRef;
use tracing::debug;

use super::super::core::{Context, Handler};
use super::{channel_list, source_nick};
use crate::error::HandlerResult;
use crate::state::ChannelTracker;

/// Adds the joining nick, with no role, to each tracked channel joined.
pub struct JoinHandler {
    tracker: ChannelTracker,
}

impl JoinHandler {
    pub fn new(tracker: ChannelTracker) -> Self {
        Self { tracker }
    }
}

#[async_trait]
impl Handler for JoinHandler {
    async fn handle(&self, _ctx: &mut Context, msg: &MessageRef<'_>) -> HandlerResult {
        let nick = source_nick(msg)?;

        for channel in channel_list(msg)? {
            if self.tracker.update(channel, |r| r.join(nick)).is_some() {
                debug!(channel, nick, "join");
            }
        }
        Ok(())
    }
}
