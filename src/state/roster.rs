//! Channel rosters and the shared tracker state.
//!
//! Channel and nick keys are stored RFC 1459 case-folded; the display
//! form of each name is kept alongside.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use slirc_proto::irc_to_lower;

/// Role a channel member holds, as marked in a NAMES reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Regular,
    Voice,
    Op,
}

impl Role {
    /// Split a leading `@` or `+` marker off a NAMES token.
    pub fn split_marker(token: &str) -> (Role, &str) {
        if let Some(nick) = token.strip_prefix('@') {
            (Role::Op, nick)
        } else if let Some(nick) = token.strip_prefix('+') {
            (Role::Voice, nick)
        } else {
            (Role::Regular, token)
        }
    }

    /// The NAMES marker for this role.
    pub fn prefix_char(&self) -> Option<char> {
        match self {
            Role::Op => Some('@'),
            Role::Voice => Some('+'),
            Role::Regular => None,
        }
    }
}

/// Population state of a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterState {
    /// Tracked, nothing heard yet.
    #[default]
    Empty,
    /// NAMES replies arriving, end of list not yet seen.
    Populating,
    Tracked,
}

/// One nick present in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub nick: String,
    pub role: Role,
}

/// The set of nicks believed present in one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRoster {
    channel: String,
    state: RosterState,
    members: HashMap<String, Member>,
}

impl ChannelRoster {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            state: RosterState::Empty,
            members: HashMap::new(),
        }
    }

    /// Channel name as first given to the tracker.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn state(&self) -> RosterState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, nick: &str) -> bool {
        self.members.contains_key(&irc_to_lower(nick))
    }

    pub fn member(&self, nick: &str) -> Option<&Member> {
        self.members.get(&irc_to_lower(nick))
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Member nicks, sorted.
    pub fn nicks(&self) -> Vec<&str> {
        let mut nicks: Vec<_> = self.members.values().map(|m| m.nick.as_str()).collect();
        nicks.sort_unstable();
        nicks
    }

    /// Insert-or-ignore every token of one NAMES reply.
    ///
    /// Returns the number of nicks that were new.
    pub fn add_names<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) -> usize {
        self.state = RosterState::Populating;

        let mut added = 0;
        for token in tokens {
            let (role, nick) = Role::split_marker(token);
            if nick.is_empty() {
                continue;
            }
            self.members.entry(irc_to_lower(nick)).or_insert_with(|| {
                added += 1;
                Member {
                    nick: nick.to_owned(),
                    role,
                }
            });
        }
        added
    }

    /// End of a NAMES burst.
    pub fn finish_names(&mut self) {
        self.state = RosterState::Tracked;
    }

    /// A nick joined. Returns `false` if it was already listed.
    pub fn join(&mut self, nick: &str) -> bool {
        self.settle();
        self.members
            .insert(
                irc_to_lower(nick),
                Member {
                    nick: nick.to_owned(),
                    role: Role::Regular,
                },
            )
            .is_none()
    }

    /// A nick left. Returns the member if it was listed.
    pub fn part(&mut self, nick: &str) -> Option<Member> {
        self.settle();
        self.members.remove(&irc_to_lower(nick))
    }

    fn settle(&mut self) {
        if self.state == RosterState::Empty {
            self.state = RosterState::Tracked;
        }
    }
}

/// Rosters for every tracked channel, shared between the tracker handlers
/// and whoever asked for tracking.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct ChannelTracker {
    rosters: Arc<RwLock<HashMap<String, ChannelRoster>>>,
}

impl ChannelTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `channel`. Returns `false` if it already was.
    pub fn track(&self, channel: &str) -> bool {
        let mut rosters = self.rosters.write();
        let key = irc_to_lower(channel);
        if rosters.contains_key(&key) {
            return false;
        }
        rosters.insert(key, ChannelRoster::new(channel));
        true
    }

    /// Stop tracking `channel`, returning its last roster.
    pub fn untrack(&self, channel: &str) -> Option<ChannelRoster> {
        self.rosters.write().remove(&irc_to_lower(channel))
    }

    pub fn is_tracked(&self, channel: &str) -> bool {
        self.rosters.read().contains_key(&irc_to_lower(channel))
    }

    /// Snapshot of the roster for `channel`.
    pub fn roster(&self, channel: &str) -> Option<ChannelRoster> {
        self.rosters.read().get(&irc_to_lower(channel)).cloned()
    }

    /// Tracked channel names, sorted.
    pub fn channels(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .rosters
            .read()
            .values()
            .map(|r| r.channel.clone())
            .collect();
        names.sort_unstable();
        names
    }

    /// Run `f` on the roster for `channel`, if tracked.
    pub(crate) fn update<R>(
        &self,
        channel: &str,
        f: impl FnOnce(&mut ChannelRoster) -> R,
    ) -> Option<R> {
        self.rosters.write().get_mut(&irc_to_lower(channel)).map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_insert_or_ignore() {
        let mut roster = ChannelRoster::new("#rust");
        assert_eq!(roster.add_names(["@alice", "+bob", "carol"]), 3);
        let once = roster.clone();

        assert_eq!(roster.add_names(["@alice", "+bob", "carol"]), 0);
        assert_eq!(roster, once);
        assert_eq!(roster.member("alice").map(|m| m.role), Some(Role::Op));
        assert_eq!(roster.member("BOB").map(|m| m.role), Some(Role::Voice));
        assert_eq!(roster.member("carol").map(|m| m.role), Some(Role::Regular));
    }

    #[test]
    fn state_transitions() {
        let mut roster = ChannelRoster::new("#c");
        assert_eq!(roster.state(), RosterState::Empty);
        roster.add_names(["a"]);
        assert_eq!(roster.state(), RosterState::Populating);
        roster.join("b");
        assert_eq!(roster.state(), RosterState::Populating);
        roster.finish_names();
        assert_eq!(roster.state(), RosterState::Tracked);

        let mut fresh = ChannelRoster::new("#d");
        fresh.part("nobody");
        assert_eq!(fresh.state(), RosterState::Tracked);
    }

    #[test]
    fn join_then_part_restores_roster() {
        let mut roster = ChannelRoster::new("#c");
        roster.add_names(["@op", "regular"]);
        roster.finish_names();
        let before = roster.clone();

        assert!(roster.join("bob"));
        assert!(roster.contains("bob"));
        assert_eq!(roster.part("Bob").map(|m| m.nick), Some("bob".to_owned()));
        assert_eq!(roster, before);
        assert!(roster.part("bob").is_none());
    }

    #[test]
    fn nicks_keep_display_case() {
        let mut roster = ChannelRoster::new("#c");
        roster.add_names(["Zed", "@Alice[m]", "+"]);
        assert_eq!(roster.nicks(), ["Alice[m]", "Zed"]);
        assert!(roster.contains("alice{m}"));
    }

    #[test]
    fn tracker_clones_share_state() {
        let tracker = ChannelTracker::new();
        let other = tracker.clone();
        assert!(tracker.track("#Rust"));
        assert!(!other.track("#rust"));
        assert!(other.is_tracked("#RUST"));

        other.update("#rust", |r| r.join("ferris"));
        let snapshot = tracker.roster("#rust").unwrap();
        assert_eq!(snapshot.channel(), "#Rust");
        assert!(snapshot.contains("ferris"));

        assert_eq!(tracker.channels(), ["#Rust"]);
        assert!(tracker.untrack("#rust").is_some());
        assert!(tracker.roster("#rust").is_none());
    }

    #[test]
    fn role_prefix_chars() {
        assert_eq!(Role::split_marker("@alice"), (Role::Op, "alice"));
        assert_eq!(Role::split_marker("+bob"), (Role::Voice, "bob"));
        assert_eq!(Role::split_marker("carol"), (Role::Regular, "carol"));
        assert_eq!(Role::Op.prefix_char(), Some('@'));
        assert_eq!(Role::Regular.prefix_char(), None);
    }
}
