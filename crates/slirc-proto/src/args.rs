//! Parameter extraction from a message remainder.
//!
//! The remainder is everything after the command word. Parameters are
//! separated by spaces; a parameter starting with `:` is the trailing
//! parameter and runs to the end of the line, spaces included.
//!
//! ```
//! use slirc_proto::args::{extract, CommaList};
//!
//! let args = extract("alice,#rust :hello there", 2).unwrap();
//! assert_eq!(args.as_slice(), &["alice,#rust", "hello there"]);
//!
//! let targets: Vec<_> = CommaList::new(args[0]).collect();
//! assert_eq!(targets, ["alice", "#rust"]);
//! ```

use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::error::ArgCountMismatch;

/// RFC 2812 parameter limit.
pub const MAX_PARAMS: usize = 15;

/// Extracted parameters, borrowed from the remainder.
pub type Args<'a> = SmallVec<[&'a str; MAX_PARAMS]>;

/// Take at most `max_args` parameters from `remainder`.
///
/// Succeeds when the trailing `:` parameter was reached, or when the input
/// ran out exactly as the loop ended. Bytes left over once `max_args`
/// parameters are taken yield [`ArgCountMismatch`].
///
/// A middle parameter ends at the next space. A run of spaces between two
/// parameters is skipped, but spaces with nothing after them are left over
/// and count as unconsumed.
pub fn extract(remainder: &str, max_args: usize) -> Result<Args<'_>, ArgCountMismatch> {
    let mut args = Args::new();
    let mut rest = remainder;

    while !rest.is_empty() && args.len() < max_args {
        if let Some(trailing) = rest.strip_prefix(':') {
            args.push(trailing);
            return Ok(args);
        }

        match rest.find(' ') {
            Some(end) => {
                args.push(&rest[..end]);
                let next = rest[end..].trim_start_matches(' ');
                if next.is_empty() {
                    rest = &rest[end..];
                    break;
                }
                rest = next;
            }
            None => {
                args.push(rest);
                rest = "";
            }
        }
    }

    if rest.is_empty() {
        Ok(args)
    } else {
        Err(ArgCountMismatch {
            max: max_args,
            parsed: args.len(),
            unconsumed: rest.len(),
        })
    }
}

/// The last `count` parameters of `remainder`.
///
/// For replies whose leading parameters vary between servers, such as
/// RPL_NAMREPLY (`<me> [=*@] <channel> :<nicks>`).
pub fn extract_last(remainder: &str, count: usize) -> Result<Args<'_>, ArgCountMismatch> {
    let all = extract(remainder, MAX_PARAMS)?;
    if all.len() < count {
        return Err(ArgCountMismatch {
            max: count,
            parsed: all.len(),
            unconsumed: 0,
        });
    }
    Ok(all[all.len() - count..].iter().copied().collect())
}

/// Take exactly `count` parameters.
pub fn extract_exact(remainder: &str, count: usize) -> Result<Args<'_>, ArgCountMismatch> {
    let args = extract(remainder, count)?;
    if args.len() != count {
        return Err(ArgCountMismatch {
            max: count,
            parsed: args.len(),
            unconsumed: 0,
        });
    }
    Ok(args)
}

/// Restartable iterator over the comma-separated elements of one parameter.
///
/// Empty elements are skipped, so `"a,b,"` yields `a`, `b`. Clone it to
/// walk the list again.
#[derive(Clone, Debug)]
pub struct CommaList<'a> {
    rest: &'a str,
}

impl<'a> CommaList<'a> {
    /// Iterate over the elements of `arg`.
    pub fn new(arg: &'a str) -> Self {
        Self { rest: arg }
    }
}

/// Restartable iterator over the space-separated tokens of one parameter.
///
/// Runs of spaces are treated as one separator.
#[derive(Clone, Debug)]
pub struct SpaceList<'a> {
    rest: &'a str,
}

impl<'a> SpaceList<'a> {
    /// Iterate over the tokens of `arg`.
    pub fn new(arg: &'a str) -> Self {
        Self { rest: arg }
    }
}

fn next_token<'a>(rest: &mut &'a str, sep: char) -> Option<&'a str> {
    loop {
        let cur: &'a str = *rest;
        if cur.is_empty() {
            return None;
        }
        let (token, tail) = cur.split_once(sep).unwrap_or((cur, ""));
        *rest = tail;
        if !token.is_empty() {
            return Some(token);
        }
    }
}

impl<'a> Iterator for CommaList<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        next_token(&mut self.rest, ',')
    }
}

impl<'a> Iterator for SpaceList<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        next_token(&mut self.rest, ' ')
    }
}

impl FusedIterator for CommaList<'_> {}
impl FusedIterator for SpaceList<'_> {}
