//! Error types for the classicrypt library.

use thiserror::Error;

/// Errors produced by the ciphers in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// A character outside the `' '..='_'` band reached the Caesar cipher.
    #[error("character {character:?} at position {position} is outside the alphabet band")]
    OutOfAlphabet {
        /// The offending character, after uppercasing.
        character: char,
        /// Index of the character within the message, counted in chars.
        position: usize,
    },
    /// The running key seed has no characters to repeat.
    #[error("running key must be at least 1 character long")]
    EmptyKey,
}
