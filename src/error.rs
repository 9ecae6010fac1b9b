//! Error types

/// Error parsing an invalid string representation of UUID.
///
/// Only the 36-character `8-4-4-4-12` hexadecimal form is accepted. Braces, the `urn:uuid:`
/// prefix, the 32-digit simple form, and surrounding whitespace are all rejected.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input was not exactly 36 bytes long.
    #[error("invalid string representation: expected 36 characters, found {0}")]
    InvalidLength(usize),

    /// A non-hexadecimal byte was found where a digit was expected.
    #[error("invalid string representation: invalid hexadecimal digit at index {index}")]
    InvalidCharacter {
        /// The byte offset of the offending character.
        index: usize,
    },

    /// A group separator other than `-` was found at one of the dash positions.
    #[error("invalid string representation: expected '-' at index {index}")]
    InvalidGroupSeparator {
        /// The byte offset of the offending character.
        index: usize,
    },
}

/// Errors returned by the fallible operations of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be parsed as a UUID.
    #[error(transparent)]
    InvalidFormat(#[from] ParseError),

    /// The operating system random number source failed.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}
