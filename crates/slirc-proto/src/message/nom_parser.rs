//! Nom grammar for the `[":" prefix SP] command [SP remainder]` split.

use nom::{
    bytes::complete::{take_till, take_while},
    character::complete::char,
    combinator::{cut, opt},
    sequence::{preceded, terminated},
    IResult,
};

/// The three spans of a line, before command classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawParts<'a> {
    /// Prefix without its leading `:`.
    pub prefix: Option<&'a str>,
    /// Command token, unclassified. May be empty.
    pub command: &'a str,
    /// Everything after the command and the spaces following it.
    pub remainder: &'a str,
}

fn spaces(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ')(input)
}

/// `:` then everything up to the next space, which must exist.
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(
        char(':'),
        cut(terminated(take_till(|c: char| c == ' '), char(' '))),
    )(input)
}

fn parse_command(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == ' ')(input)
}

fn parse_parts(input: &str) -> IResult<&str, RawParts<'_>> {
    let (input, prefix) = opt(parse_prefix)(input)?;
    let (input, _) = spaces(input)?;
    let (input, command) = parse_command(input)?;
    let (remainder, _) = spaces(input)?;

    Ok((
        "",
        RawParts {
            prefix,
            command,
            remainder,
        },
    ))
}

impl<'a> RawParts<'a> {
    /// Split `line`. The only way this fails is a `:` prefix with no space
    /// after it.
    pub(crate) fn split(line: &'a str) -> Option<Self> {
        parse_parts(line).ok().map(|(_, parts)| parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_prefix() {
        let parts = RawParts::split(":a!b@c PRIVMSG #chan :hello world").unwrap();
        assert_eq!(parts.prefix, Some("a!b@c"));
        assert_eq!(parts.command, "PRIVMSG");
        assert_eq!(parts.remainder, "#chan :hello world");
    }

    #[test]
    fn test_split_without_prefix() {
        let parts = RawParts::split("PING :server.example").unwrap();
        assert_eq!(parts.prefix, None);
        assert_eq!(parts.command, "PING");
        assert_eq!(parts.remainder, ":server.example");
    }

    #[test]
    fn test_space_runs_are_skipped() {
        let parts = RawParts::split(":srv   001    me :hi").unwrap();
        assert_eq!(parts.prefix, Some("srv"));
        assert_eq!(parts.command, "001");
        assert_eq!(parts.remainder, "me :hi");
    }

    #[test]
    fn test_bare_command() {
        let parts = RawParts::split("PING").unwrap();
        assert_eq!(parts.command, "PING");
        assert_eq!(parts.remainder, "");
    }

    #[test]
    fn test_prefix_without_space_fails() {
        assert_eq!(RawParts::split(":server.example"), None);
        assert_eq!(RawParts::split(":"), None);
    }

    #[test]
    fn test_prefix_only_yields_empty_command() {
        let parts = RawParts::split(":server ").unwrap();
        assert_eq!(parts.prefix, Some("server"));
        assert_eq!(parts.command, "");
    }
}
