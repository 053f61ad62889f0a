//! PART handler.

use async_trait::async_trait;
use slirc_proto::MessageRef;
use tracing::debug;

use super::super::core::{Context, Handler};
use super::{channel_list, source_nick};
use crate::error::HandlerResult;
use crate::state::ChannelTracker;

/// Removes the parting nick from each tracked channel left.
pub struct PartHandler {
    tracker: ChannelTracker,
}

impl PartHandler {
    pub fn new(tracker: ChannelTracker) -> Self {
        Self { tracker }
    }
}

#[async_trait]
impl Handler for PartHandler {
    async fn handle(&self, _ctx: &mut Context, msg: &MessageRef<'_>) -> HandlerResult {
        let nick = source_nick(msg)?;

        for channel in channel_list(msg)? {
            match self.tracker.update(channel, |r| r.part(nick)) {
                Some(Some(_)) => debug!(channel, nick, "part"),
                Some(None) => debug!(channel, nick, "part from nick not in roster"),
                None => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::core::Identity;

    #[tokio::test]
    async fn part_of_unknown_nick_is_not_an_error() {
        let tracker = ChannelTracker::new();
        tracker.track("#c");
        let mut ctx = Context::new(Identity::new("bot", "localhost", 6667), 512);

        let msg = MessageRef::parse(b":ghost!g@h PART #c :bye").unwrap();
        PartHandler::new(tracker.clone())
            .handle(&mut ctx, &msg)
            .await
            .unwrap();
        assert!(tracker.roster("#c").unwrap().is_empty());
    }
}
