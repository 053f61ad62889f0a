//! State management module.
//!
//! Holds the channel rosters maintained by the tracker handlers.

mod roster;

pub use roster::{ChannelRoster, ChannelTracker, Member, Role, RosterState};
