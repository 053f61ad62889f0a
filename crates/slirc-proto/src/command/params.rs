//! Typed views over the parameters of commands the core parses but does
//! not dispatch itself.

use crate::args::{extract, extract_exact, extract_last, CommaList, SpaceList};
use crate::error::ArgCountMismatch;

/// `PRIVMSG <target>{,<target>} :<text>`
#[derive(Clone, Debug)]
pub struct Privmsg<'a> {
    /// Message prefix (sender mask); empty if the line had none.
    pub source: &'a str,
    /// Recipients, in the order given.
    pub targets: CommaList<'a>,
    /// Message body.
    pub text: &'a str,
}

impl<'a> Privmsg<'a> {
    /// Parse a PRIVMSG remainder. Exactly two parameters are required.
    pub fn parse(source: &'a str, remainder: &'a str) -> Result<Self, ArgCountMismatch> {
        let args = extract_exact(remainder, 2)?;
        Ok(Self {
            source,
            targets: CommaList::new(args[0]),
            text: args[1],
        })
    }

    /// First recipient, if any.
    pub fn first_target(&self) -> Option<&'a str> {
        self.targets.clone().next()
    }
}

/// `KICK <channel> <nick> [:<reason>]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kick<'a> {
    /// Mask of the user who issued the kick.
    pub kicker: &'a str,
    /// Channel the user was removed from.
    pub channel: &'a str,
    /// Nickname that was kicked.
    pub nick: &'a str,
    /// Kick reason, when the server forwarded one.
    pub reason: Option<&'a str>,
}

impl<'a> Kick<'a> {
    /// Parse a KICK remainder (two or three parameters).
    pub fn parse(kicker: &'a str, remainder: &'a str) -> Result<Self, ArgCountMismatch> {
        let args = extract(remainder, 3)?;
        if args.len() < 2 {
            return Err(ArgCountMismatch {
                max: 3,
                parsed: args.len(),
                unconsumed: 0,
            });
        }
        Ok(Self {
            kicker,
            channel: args[0],
            nick: args[1],
            reason: args.get(2).copied(),
        })
    }
}

/// RPL_NAMREPLY (353): `<me> [=*@] <channel> :[@+]<nick> ...`
#[derive(Clone, Debug)]
pub struct NamesReply<'a> {
    /// Channel the names belong to.
    pub channel: &'a str,
    /// Nick tokens, each possibly carrying a `@` or `+` role marker.
    pub nicks: SpaceList<'a>,
}

impl<'a> NamesReply<'a> {
    /// Parse a 353 remainder from its last two parameters.
    pub fn parse(remainder: &'a str) -> Result<Self, ArgCountMismatch> {
        let args = extract_last(remainder, 2)?;
        Ok(Self {
            channel: args[0],
            nicks: SpaceList::new(args[1]),
        })
    }
}
