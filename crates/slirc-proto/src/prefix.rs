//! Message prefix splitting.
//!
//! A prefix names the origin of a message: either a server name or a
//! `nick!user@host` mask. Splitting is lenient and allocation-free.

/// A borrowed, split message prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixRef<'a> {
    /// Nickname, if the prefix names a user.
    pub nick: Option<&'a str>,
    /// Username (ident).
    pub user: Option<&'a str>,
    /// Hostname, or the server name for server prefixes.
    pub host: Option<&'a str>,
    /// The prefix as received, without the leading `:`.
    pub raw: &'a str,
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl<'a> PrefixRef<'a> {
    /// Split a prefix into its components.
    pub fn parse(s: &'a str) -> Self {
        if let Some(at_pos) = s.find('@') {
            let before = &s[..at_pos];
            let host = &s[at_pos + 1..];

            let (nick, user) = match before.split_once('!') {
                Some((n, u)) => (non_empty(n), non_empty(u)),
                None => (non_empty(before), None),
            };

            Self {
                nick,
                user,
                host: Some(host),
                raw: s,
            }
        } else if let Some((nick, user)) = s.split_once('!') {
            Self {
                nick: non_empty(nick),
                user: non_empty(user),
                host: None,
                raw: s,
            }
        } else if s.contains('.') {
            Self {
                nick: None,
                user: None,
                host: Some(s),
                raw: s,
            }
        } else {
            Self {
                nick: non_empty(s),
                user: None,
                host: None,
                raw: s,
            }
        }
    }

    /// Whether this prefix looks like a server name.
    pub fn is_server(&self) -> bool {
        self.nick.is_none() && self.user.is_none() && self.host.is_some()
    }

    /// Get the nickname if this is a user prefix.
    #[inline]
    pub fn nickname(&self) -> Option<&'a str> {
        self.nick
    }
}

/// The part of a `nick!user@host` prefix before the `!`.
///
/// Returns `None` when the prefix carries no `!`, i.e. it does not name a
/// user session. JOIN and PART always arrive with a full mask.
pub fn nick_before_bang(prefix: &str) -> Option<&str> {
    prefix
        .split_once('!')
        .map(|(nick, _)| nick)
        .filter(|nick| !nick.is_empty())
}
