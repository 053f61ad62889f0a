//! Splitting one line into prefix, command and remainder.
//!
//! [`MessageRef`] borrows every part from the line it was parsed from and
//! is valid only as long as that line. Use [`MessageRef::to_owned`] to keep
//! a message past the current dispatch pass.

mod borrowed;
mod nom_parser;
mod types;

pub use self::borrowed::MessageRef;
pub use self::types::Message;
