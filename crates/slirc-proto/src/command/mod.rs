//! Command classification and typed parameter views.
//!
//! A command word is either a three-digit numeric reply or a run of ASCII
//! letters. [`CommandRef`] borrows from the line; [`Command`] owns its word
//! and is what handler registries key on.

mod params;

use std::fmt::{self, Display, Formatter};

use crate::error::ParseError;

pub use params::{Kick, NamesReply, Privmsg};

/// Highest numeric reply code.
pub const MAX_NUMERIC: u16 = 999;

/// A classified command borrowed from a message line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandRef<'a> {
    /// Three-digit numeric reply (0-999).
    Numeric(u16),
    /// Alphabetic command word, kept with its original case.
    Word(&'a str),
}

/// An owned command key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Command {
    /// Three-digit numeric reply (0-999).
    Numeric(u16),
    /// Alphabetic command word, matched case-sensitively.
    Word(String),
}

/// Value of `s` if it is exactly three ASCII digits.
fn three_digits(s: &str) -> Option<u16> {
    let b = s.as_bytes();
    if b.len() == 3 && b.iter().all(u8::is_ascii_digit) {
        Some(b.iter().fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0')))
    } else {
        None
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

impl<'a> CommandRef<'a> {
    /// Classify a command token.
    ///
    /// Exactly three ASCII digits is a numeric reply; a non-empty run of
    /// ASCII letters is a word. Anything else is
    /// [`ParseError::UnparsableCommand`].
    pub fn classify(token: &'a str) -> Result<Self, ParseError> {
        if let Some(code) = three_digits(token) {
            Ok(CommandRef::Numeric(code))
        } else if is_word(token) {
            Ok(CommandRef::Word(token))
        } else {
            Err(ParseError::UnparsableCommand(token.to_owned()))
        }
    }

    /// The numeric code, if this is a numeric reply.
    #[inline]
    pub fn numeric(&self) -> Option<u16> {
        match *self {
            CommandRef::Numeric(code) => Some(code),
            CommandRef::Word(_) => None,
        }
    }

    /// The command word, if this is not a numeric reply.
    #[inline]
    pub fn word(&self) -> Option<&'a str> {
        match *self {
            CommandRef::Numeric(_) => None,
            CommandRef::Word(word) => Some(word),
        }
    }

    /// Copy into an owned [`Command`].
    pub fn to_owned(&self) -> Command {
        match *self {
            CommandRef::Numeric(code) => Command::Numeric(code),
            CommandRef::Word(word) => Command::Word(word.to_owned()),
        }
    }
}

impl Command {
    /// A numeric key, or `None` if `code` is above 999.
    pub fn numeric(code: u16) -> Option<Self> {
        (code <= MAX_NUMERIC).then_some(Command::Numeric(code))
    }

    /// A word key, or `None` if `word` is empty or not purely alphabetic.
    pub fn word(word: impl Into<String>) -> Option<Self> {
        let word = word.into();
        is_word(&word).then_some(Command::Word(word))
    }

    /// Classify a command token into an owned key.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        CommandRef::classify(token).map(|c| c.to_owned())
    }

    /// Borrow as a [`CommandRef`].
    pub fn as_ref(&self) -> CommandRef<'_> {
        match self {
            Command::Numeric(code) => CommandRef::Numeric(*code),
            Command::Word(word) => CommandRef::Word(word),
        }
    }

    /// Whether the key is in the range a parsed line can produce.
    pub fn is_valid(&self) -> bool {
        match self {
            Command::Numeric(code) => *code <= MAX_NUMERIC,
            Command::Word(word) => is_word(word),
        }
    }
}

impl Display for CommandRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandRef::Numeric(code) => write!(f, "{code:03}"),
            CommandRef::Word(word) => f.write_str(word),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

impl From<CommandRef<'_>> for Command {
    fn from(c: CommandRef<'_>) -> Self {
        c.to_owned()
    }
}

impl PartialEq<Command> for CommandRef<'_> {
    fn eq(&self, other: &Command) -> bool {
        *self == other.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_numeric() {
        assert_eq!(CommandRef::classify("353"), Ok(CommandRef::Numeric(353)));
        assert_eq!(CommandRef::classify("001"), Ok(CommandRef::Numeric(1)));
        assert_eq!(CommandRef::classify("000"), Ok(CommandRef::Numeric(0)));
    }

    #[test]
    fn test_classify_word_keeps_case() {
        assert_eq!(CommandRef::classify("PRIVMSG"), Ok(CommandRef::Word("PRIVMSG")));
        assert_eq!(CommandRef::classify("privmsg"), Ok(CommandRef::Word("privmsg")));
    }

    #[test]
    fn test_classify_rejects() {
        for bad in ["", "12", "1234", "P1NG", "PING!", "١٢٣", "ÄB"] {
            assert_eq!(
                CommandRef::classify(bad),
                Err(ParseError::UnparsableCommand(bad.to_owned())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_numeric_and_word_keys_never_collide() {
        let numeric = Command::Numeric(1);
        let word = Command::word("one").unwrap();
        assert_ne!(numeric, word);
        assert_ne!(Command::parse("001").unwrap(), Command::Word("001".into()));
    }

    #[test]
    fn test_key_constructors() {
        assert_eq!(Command::numeric(999), Some(Command::Numeric(999)));
        assert_eq!(Command::numeric(1000), None);
        assert_eq!(Command::word("JOIN"), Some(Command::Word("JOIN".into())));
        assert_eq!(Command::word("JOIN2"), None);
        assert_eq!(Command::word(""), None);
        assert!(!Command::Word("A B".into()).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::Numeric(1).to_string(), "001");
        assert_eq!(CommandRef::Numeric(353).to_string(), "353");
        assert_eq!(Command::Word("KICK".into()).to_string(), "KICK");
    }

    #[test]
    fn test_ref_owned_equality() {
        let owned = Command::Word("PART".into());
        assert_eq!(CommandRef::Word("PART"), owned);
        assert_eq!(owned.as_ref().to_owned(), owned);
    }
}
