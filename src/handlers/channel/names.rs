//! RPL_NAMREPLY (353) and RPL_ENDOFNAMES (366) handlers.

use async_trait::async_trait;
use slirc_proto::{MessageRef, NamesReply, extract_last};
use tracing::debug;

use super::super::core::{Context, Handler};
use crate::error::HandlerResult;
use crate::state::ChannelTracker;

/// Adds every nick of a NAMES reply to the channel's roster.
///
/// Nicks already present are left alone, so a reply split over several
/// lines, or repeated, yields the same roster.
pub struct NamReplyHandler {
    tracker: ChannelTracker,
}

impl NamReplyHandler {
    pub fn new(tracker: ChannelTracker) -> Self {
        Self { tracker }
    }
}

#[async_trait]
impl Handler for NamReplyHandler {
    async fn handle(&self, _ctx: &mut Context, msg: &MessageRef<'_>) -> HandlerResult {
        // <me> [=*@] <channel> :[@+]<nick> ...
        let reply = NamesReply::parse(msg.remainder)?;

        match self.tracker.update(reply.channel, |r| r.add_names(reply.nicks)) {
            Some(added) => debug!(channel = reply.channel, added, "names"),
            None => debug!(channel = reply.channel, "names for untracked channel"),
        }
        Ok(())
    }
}

/// Marks a roster complete at the end of a NAMES burst.
pub struct EndOfNamesHandler {
    tracker: ChannelTracker,
}

impl EndOfNamesHandler {
    pub fn new(tracker: ChannelTracker) -> Self {
        Self { tracker }
    }
}

#[async_trait]
impl Handler for EndOfNamesHandler {
    async fn handle(&self, _ctx: &mut Context, msg: &MessageRef<'_>) -> HandlerResult {
        // <me> <channel> :End of /NAMES list.
        let args = extract_last(msg.remainder, 2)?;
        let channel = args[0];

        if let Some(len) = self.tracker.update(channel, |r| {
            r.finish_names();
            r.len()
        }) {
            debug!(channel, members = len, "end of names");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::core::Identity;
    use crate::state::RosterState;

    fn ctx() -> Context {
        Context::new(Identity::new("bot", "localhost", 6667), 512)
    }

    #[tokio::test]
    async fn repeated_reply_is_idempotent() {
        let tracker = ChannelTracker::new();
        tracker.track("#c");
        let handler = NamReplyHandler::new(tracker.clone());
        let msg = MessageRef::parse(b":srv 353 bot @ #c :@a +b c").unwrap();

        handler.handle(&mut ctx(), &msg).await.unwrap();
        let once = tracker.roster("#c").unwrap();
        handler.handle(&mut ctx(), &msg).await.unwrap();
        assert_eq!(tracker.roster("#c").unwrap(), once);
        assert_eq!(once.state(), RosterState::Populating);
        assert_eq!(once.len(), 3);
    }

    #[tokio::test]
    async fn reply_without_visibility_marker() {
        let tracker = ChannelTracker::new();
        tracker.track("#c");
        let handler = NamReplyHandler::new(tracker.clone());
        // RFC 1459 servers omit the =*@ parameter.
        let msg = MessageRef::parse(b":srv 353 bot #c :x y").unwrap();
        handler.handle(&mut ctx(), &msg).await.unwrap();
        assert_eq!(tracker.roster("#c").unwrap().nicks(), ["x", "y"]);
    }

    #[tokio::test]
    async fn short_reply_is_rejected() {
        let handler = NamReplyHandler::new(ChannelTracker::new());
        let msg = MessageRef::parse(b":srv 353 :x").unwrap();
        let err = handler.handle(&mut ctx(), &msg).await.unwrap_err();
        assert_eq!(err.error_code(), "arg_count_mismatch");
    }

    #[tokio::test]
    async fn end_of_names_completes_roster() {
        let tracker = ChannelTracker::new();
        tracker.track("#c");
        let msg = MessageRef::parse(b":srv 366 bot #C :End of /NAMES list.").unwrap();
        EndOfNamesHandler::new(tracker.clone())
            .handle(&mut ctx(), &msg)
            .await
            .unwrap();
        assert_eq!(tracker.roster("#c").unwrap().state(), RosterState::Tracked);
    }
}
