//! Numeric reply codes the client core refers to by name.
//!
//! # Reference
//! - RFC 1459 section 6, RFC 2812 section 5

#![allow(missing_docs)]

pub const RPL_WELCOME: u16 = 1;
pub const RPL_YOURHOST: u16 = 2;
pub const RPL_CREATED: u16 = 3;
pub const RPL_MYINFO: u16 = 4;
pub const RPL_ISUPPORT: u16 = 5;
pub const RPL_LUSERCLIENT: u16 = 251;
pub const RPL_LUSEROP: u16 = 252;
pub const RPL_LUSERUNKNOWN: u16 = 253;
pub const RPL_LUSERCHANNELS: u16 = 254;
pub const RPL_LUSERME: u16 = 255;
pub const RPL_NOTOPIC: u16 = 331;
pub const RPL_TOPIC: u16 = 332;
pub const RPL_TOPICWHOTIME: u16 = 333;
pub const RPL_NAMREPLY: u16 = 353;
pub const RPL_ENDOFNAMES: u16 = 366;
pub const RPL_MOTD: u16 = 372;
pub const RPL_MOTDSTART: u16 = 375;
pub const RPL_ENDOFMOTD: u16 = 376;
pub const ERR_NOSUCHNICK: u16 = 401;
pub const ERR_NOSUCHCHANNEL: u16 = 403;
pub const ERR_CANNOTSENDTOCHAN: u16 = 404;
pub const ERR_UNKNOWNCOMMAND: u16 = 421;
pub const ERR_NOMOTD: u16 = 422;
pub const ERR_ERRONEUSNICKNAME: u16 = 432;
pub const ERR_NICKNAMEINUSE: u16 = 433;
pub const ERR_NOTONCHANNEL: u16 = 442;
pub const ERR_NEEDMOREPARAMS: u16 = 461;
pub const ERR_ALREADYREGISTRED: u16 = 462;
pub const ERR_PASSWDMISMATCH: u16 = 464;
pub const ERR_CHANNELISFULL: u16 = 471;
pub const ERR_INVITEONLYCHAN: u16 = 473;
pub const ERR_BANNEDFROMCHAN: u16 = 474;
pub const ERR_BADCHANNELKEY: u16 = 475;
pub const ERR_CHANOPRIVSNEEDED: u16 = 482;

/// Mnemonic for a numeric reply, for log output.
///
/// ```
/// assert_eq!(slirc_proto::numeric::name(353), Some("RPL_NAMREPLY"));
/// assert_eq!(slirc_proto::numeric::name(999), None);
/// ```
pub fn name(code: u16) -> Option<&'static str> {
    let name = match code {
        RPL_WELCOME => "RPL_WELCOME",
        RPL_YOURHOST => "RPL_YOURHOST",
        RPL_CREATED => "RPL_CREATED",
        RPL_MYINFO => "RPL_MYINFO",
        RPL_ISUPPORT => "RPL_ISUPPORT",
        RPL_LUSERCLIENT => "RPL_LUSERCLIENT",
        RPL_LUSEROP => "RPL_LUSEROP",
        RPL_LUSERUNKNOWN => "RPL_LUSERUNKNOWN",
        RPL_LUSERCHANNELS => "RPL_LUSERCHANNELS",
        RPL_LUSERME => "RPL_LUSERME",
        RPL_NOTOPIC => "RPL_NOTOPIC",
        RPL_TOPIC => "RPL_TOPIC",
        RPL_TOPICWHOTIME => "RPL_TOPICWHOTIME",
        RPL_NAMREPLY => "RPL_NAMREPLY",
        RPL_ENDOFNAMES => "RPL_ENDOFNAMES",
        RPL_MOTD => "RPL_MOTD",
        RPL_MOTDSTART => "RPL_MOTDSTART",
        RPL_ENDOFMOTD => "RPL_ENDOFMOTD",
        ERR_NOSUCHNICK => "ERR_NOSUCHNICK",
        ERR_NOSUCHCHANNEL => "ERR_NOSUCHCHANNEL",
        ERR_CANNOTSENDTOCHAN => "ERR_CANNOTSENDTOCHAN",
        ERR_UNKNOWNCOMMAND => "ERR_UNKNOWNCOMMAND",
        ERR_NOMOTD => "ERR_NOMOTD",
        ERR_ERRONEUSNICKNAME => "ERR_ERRONEUSNICKNAME",
        ERR_NICKNAMEINUSE => "ERR_NICKNAMEINUSE",
        ERR_NOTONCHANNEL => "ERR_NOTONCHANNEL",
        ERR_NEEDMOREPARAMS => "ERR_NEEDMOREPARAMS",
        ERR_ALREADYREGISTRED => "ERR_ALREADYREGISTRED",
        ERR_PASSWDMISMATCH => "ERR_PASSWDMISMATCH",
        ERR_CHANNELISFULL => "ERR_CHANNELISFULL",
        ERR_INVITEONLYCHAN => "ERR_INVITEONLYCHAN",
        ERR_BANNEDFROMCHAN => "ERR_BANNEDFROMCHAN",
        ERR_BADCHANNELKEY => "ERR_BADCHANNELKEY",
        ERR_CHANOPRIVSNEEDED => "ERR_CHANOPRIVSNEEDED",
        _ => return None,
    };
    Some(name)
}

/// Whether `code` is in the 400-599 error range.
#[inline]
pub fn is_error(code: u16) -> bool {
    (400..600).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(name(1), Some("RPL_WELCOME"));
        assert_eq!(name(366), Some("RPL_ENDOFNAMES"));
        assert_eq!(name(433), Some("ERR_NICKNAMEINUSE"));
        assert_eq!(name(0), None);
    }

    #[test]
    fn test_is_error() {
        assert!(is_error(ERR_NICKNAMEINUSE));
        assert!(!is_error(RPL_NAMREPLY));
        assert!(!is_error(600));
    }
}
