//! RFC 1459 case mapping for nicknames and channel names.
//!
//! Besides ASCII letters, `[]\~` are the upper-case forms of `{}|^`.
//! Every folded character is ASCII, so folding never changes a byte
//! outside that range and names can be compared byte by byte.

/// Fold one byte. Bytes outside the mapped set come back unchanged.
#[inline]
pub const fn irc_lower_byte(b: u8) -> u8 {
    match b {
        b'[' => b'{',
        b']' => b'}',
        b'\\' => b'|',
        b'~' => b'^',
        _ => b.to_ascii_lowercase(),
    }
}

/// Fold one character.
#[inline]
pub const fn irc_lower_char(c: char) -> char {
    if c.is_ascii() {
        irc_lower_byte(c as u8) as char
    } else {
        c
    }
}

/// Fold a name into the form used as a map key.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(irc_lower_char).collect()
}

/// Case-insensitive name comparison.
pub fn irc_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.bytes()
            .zip(b.bytes())
            .all(|(x, y)| irc_lower_byte(x) == irc_lower_byte(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_brackets_and_tilde_fold_down() {
        assert_eq!(irc_lower_byte(b'['), b'{');
        assert_eq!(irc_lower_byte(b'~'), b'^');
        assert_eq!(irc_lower_char('\\'), '|');
        assert_eq!(irc_lower_char(']'), '}');

        // Already lower-case forms stay put.
        assert_eq!(irc_lower_char('{'), '{');
        assert_eq!(irc_lower_char('^'), '^');
    }

    #[test]
    fn test_roster_keys() {
        assert_eq!(irc_to_lower("#Rust[Dev]"), "#rust{dev}");
        assert_eq!(irc_to_lower("Guest~42"), "guest^42");
        assert_eq!(irc_to_lower("@Op"), "@op");
    }

    #[test]
    fn test_non_ascii_is_left_alone() {
        assert_eq!(irc_lower_char('Ä'), 'Ä');
        assert_eq!(irc_to_lower("#Café"), "#café");
        assert!(!irc_eq("#CAFÉ", "#café"));
        assert!(irc_eq("#CAFé", "#café"));
    }

    #[test]
    fn test_irc_eq_lengths() {
        assert!(irc_eq("Bot\\Away", "bot|away"));
        assert!(!irc_eq("bob", "bobby"));
        assert!(!irc_eq("é", "e"));
        assert!(irc_eq("", ""));
    }

    proptest! {
        #[test]
        fn eq_agrees_with_folded_keys(
            a in "[A-Za-z\\[\\]\\\\~{}|^#é]{0,12}",
            b in "[A-Za-z\\[\\]\\\\~{}|^#é]{0,12}",
        ) {
            prop_assert_eq!(irc_eq(&a, &b), irc_to_lower(&a) == irc_to_lower(&b));
            prop_assert!(irc_eq(&a, &irc_to_lower(&a)));
        }
    }
}
