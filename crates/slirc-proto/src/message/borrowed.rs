//! Zero-copy message view.
//!
//! ```
//! use slirc_proto::message::MessageRef;
//! use slirc_proto::CommandRef;
//!
//! let msg = MessageRef::parse(b":a!b@c PRIVMSG #chan :hello world").unwrap();
//! assert_eq!(msg.prefix, Some("a!b@c"));
//! assert_eq!(msg.command, CommandRef::Word("PRIVMSG"));
//! assert_eq!(msg.remainder, "#chan :hello world");
//! assert_eq!(msg.args(2).unwrap().as_slice(), &["#chan", "hello world"]);
//! ```

use std::fmt::{self, Display, Formatter};

use crate::args::{self, Args};
use crate::command::CommandRef;
use crate::error::{extract_command_hint, ArgCountMismatch, ParseError};
use crate::prefix::PrefixRef;

use super::nom_parser::RawParts;
use super::Message;

/// A message borrowed from one received line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageRef<'a> {
    /// Prefix without its leading `:`, if the line had one.
    pub prefix: Option<&'a str>,
    /// Classified command.
    pub command: CommandRef<'a>,
    /// Parameters after the command, unsplit.
    pub remainder: &'a str,
    /// The whole line.
    pub raw: &'a str,
}

impl<'a> MessageRef<'a> {
    /// Parse one line as produced by the framer.
    ///
    /// The line must be valid UTF-8. A trailing `\r\n`, if present, is
    /// ignored.
    pub fn parse(line: &'a [u8]) -> Result<Self, ParseError> {
        if line.is_empty() {
            return Err(ParseError::EmptyMessage);
        }

        let text = std::str::from_utf8(line).map_err(|e| ParseError::InvalidUtf8 {
            byte_pos: e.valid_up_to(),
            details: e.to_string(),
            command_hint: extract_command_hint(line),
        })?;

        Self::parse_str(text)
    }

    /// Parse a line that is already known to be text.
    pub fn parse_str(line: &'a str) -> Result<Self, ParseError> {
        let raw = line.strip_suffix("\r\n").unwrap_or(line);
        if raw.is_empty() {
            return Err(ParseError::EmptyMessage);
        }

        let parts = RawParts::split(raw).ok_or(ParseError::MalformedPrefix)?;
        let command = CommandRef::classify(parts.command)?;

        Ok(Self {
            prefix: parts.prefix,
            command,
            remainder: parts.remainder,
            raw,
        })
    }

    /// The prefix, or the empty string when there is none.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.prefix.unwrap_or("")
    }

    /// The prefix split into nick, user and host.
    pub fn prefix_ref(&self) -> Option<PrefixRef<'a>> {
        self.prefix.map(PrefixRef::parse)
    }

    /// Nickname of the sender, if the prefix names a user.
    pub fn source_nickname(&self) -> Option<&'a str> {
        self.prefix_ref().and_then(|p| p.nickname())
    }

    /// Extract at most `max` parameters from the remainder.
    pub fn args(&self, max: usize) -> Result<Args<'a>, ArgCountMismatch> {
        args::extract(self.remainder, max)
    }

    /// The `:`-introduced trailing parameter, if present.
    pub fn trailing(&self) -> Option<&'a str> {
        let rem = self.remainder;
        if let Some(t) = rem.strip_prefix(':') {
            return Some(t);
        }
        rem.find(" :").map(|pos| &rem[pos + 2..])
    }

    /// Copy into an owned [`Message`].
    pub fn to_owned(&self) -> Message {
        Message {
            prefix: self.prefix.map(str::to_owned),
            command: self.command.to_owned(),
            remainder: self.remainder.to_owned(),
        }
    }
}

impl Display for MessageRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_privmsg() {
        let msg = MessageRef::parse(b":a!b@c PRIVMSG #chan :hello world").unwrap();
        assert_eq!(msg.prefix, Some("a!b@c"));
        assert_eq!(msg.command, CommandRef::Word("PRIVMSG"));
        assert_eq!(msg.remainder, "#chan :hello world");
        assert_eq!(msg.source_nickname(), Some("a"));
        assert_eq!(msg.trailing(), Some("hello world"));
    }

    #[test]
    fn test_parse_ping_trailing() {
        let msg = MessageRef::parse(b"PING :server.example").unwrap();
        assert_eq!(msg.prefix, None);
        assert_eq!(msg.source(), "");
        assert_eq!(msg.command, CommandRef::Word("PING"));
        assert_eq!(msg.trailing(), Some("server.example"));
    }

    #[test]
    fn test_parse_numeric() {
        let msg = MessageRef::parse(b":irc.example.org 353 me = #c :@op +v plain").unwrap();
        assert_eq!(msg.command, CommandRef::Numeric(353));
        assert!(msg.prefix_ref().unwrap().is_server());
        assert_eq!(msg.source_nickname(), None);
    }

    #[test]
    fn test_trailing_absent() {
        let msg = MessageRef::parse(b"JOIN #chan").unwrap();
        assert_eq!(msg.trailing(), None);
        let msg = MessageRef::parse(b"PING").unwrap();
        assert_eq!(msg.trailing(), None);
    }

    #[test]
    fn test_crlf_is_ignored() {
        let msg = MessageRef::parse(b"PING :x\r\n").unwrap();
        assert_eq!(msg.raw, "PING :x");
        assert_eq!(msg.remainder, ":x");
    }

    #[test]
    fn test_only_one_crlf_is_stripped() {
        let msg = MessageRef::parse(b"PING :tok\r").unwrap();
        assert_eq!(msg.raw, "PING :tok\r");
        assert_eq!(msg.trailing(), Some("tok\r"));

        let msg = MessageRef::parse(b"PING :tok\r\n\r\n").unwrap();
        assert_eq!(msg.trailing(), Some("tok\r\n"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(MessageRef::parse(b""), Err(ParseError::EmptyMessage));
        assert_eq!(MessageRef::parse(b"\r\n"), Err(ParseError::EmptyMessage));
        assert_eq!(
            MessageRef::parse(b":server.example"),
            Err(ParseError::MalformedPrefix)
        );
        assert_eq!(
            MessageRef::parse(b"P1NG :x"),
            Err(ParseError::UnparsableCommand("P1NG".into()))
        );
        assert_eq!(
            MessageRef::parse(b":srv "),
            Err(ParseError::UnparsableCommand(String::new()))
        );
    }

    #[test]
    fn test_invalid_utf8_keeps_command_hint() {
        match MessageRef::parse(b"PRIVMSG #c :\xff\xfe") {
            Err(ParseError::InvalidUtf8 {
                byte_pos,
                command_hint,
                ..
            }) => {
                assert_eq!(byte_pos, 12);
                assert_eq!(command_hint.as_deref(), Some("PRIVMSG"));
            }
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn test_to_owned_outlives_line() {
        let owned = {
            let line = b":n!u@h KICK #c bot :bye".to_vec();
            MessageRef::parse(&line).unwrap().to_owned()
        };
        assert_eq!(owned.to_string(), ":n!u@h KICK #c bot :bye");
    }
}
