//! Caesar cipher: a constant shift applied to every character.
//!
//! The shift wraps with modulus [`CAESAR_MODULUS`] anchored at
//! [`CAESAR_ANCHOR`] (`'A'`), using Rust's truncating `%`. These constants
//! describe a letter-oriented wrap that does not line up with the 64-symbol
//! band the input is validated against, so large shifts can produce
//! characters outside the band (including lowercase letters) and then fail to
//! decrypt. Shifts that keep every character inside the band round-trip
//! exactly. The constants are kept as-is for compatibility with existing
//! ciphertexts.

use crate::alphabet::check_bounds;
use crate::cipher::Cipher;
use crate::error::CipherError;

/// Anchor code of the wrap (`'A'`).
pub const CAESAR_ANCHOR: i64 = 'A' as i64;

/// Modulus of the wrap.
pub const CAESAR_MODULUS: i64 = 59;

/// The Caesar cipher. The key is a signed offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caesar;

impl Caesar {
    /// Uppercases `text`, validates it against the band and shifts every
    /// character by `offset`.
    fn shift(text: &str, offset: i64) -> Result<String, CipherError> {
        let text = text.to_uppercase();
        if let Err(err) = check_bounds(&text) {
            tracing::debug!(%err, "caesar input rejected");
            return Err(err);
        }
        tracing::trace!(len = text.len(), offset, "caesar shift");
        Ok(text
            .chars()
            .map(|c| {
                // remainder lies in -58..=58, so n is in 7..=123
                let n = (c as i64 + offset - CAESAR_ANCHOR) % CAESAR_MODULUS + CAESAR_ANCHOR;
                char::from(n as u8)
            })
            .collect())
    }
}

impl Cipher for Caesar {
    type Key = i32;

    /// Computes `((code + offset - 65) % 59) + 65` for each character.
    ///
    /// # Errors
    /// Returns [`CipherError::OutOfAlphabet`] if the uppercased plaintext has
    /// a character outside the band.
    fn encrypt(&self, plaintext: &str, key: &i32) -> Result<String, CipherError> {
        Self::shift(plaintext, i64::from(*key))
    }

    /// Computes `((code - offset - 65) % 59) + 65` for each character.
    ///
    /// # Errors
    /// Returns [`CipherError::OutOfAlphabet`] if the uppercased ciphertext has
    /// a character outside the band.
    fn decrypt(&self, ciphertext: &str, key: &i32) -> Result<String, CipherError> {
        Self::shift(ciphertext, -i64::from(*key))
    }
}

/// Encrypts `plaintext` with the Caesar cipher.
///
/// Out-of-band input is an error rather than an empty string; use
/// `.unwrap_or_default()` where the empty-string convention is wanted.
///
/// # Examples
///
/// ```
/// assert_eq!(classicrypt::caesar_encrypt("HELLO USER", 1).unwrap(), "IFMMP!VTFS");
/// assert_eq!(classicrypt::caesar_encrypt("{}", 1).unwrap_or_default(), "");
/// ```
///
/// # Errors
/// Returns [`CipherError::OutOfAlphabet`] if the uppercased plaintext has a
/// character outside the band.
pub fn caesar_encrypt(plaintext: &str, offset: i32) -> Result<String, CipherError> {
    Caesar.encrypt(plaintext, &offset)
}

/// Decrypts `ciphertext` with the Caesar cipher. Inverse of [`caesar_encrypt`]
/// for shifts that keep every character inside the band.
///
/// # Errors
/// Returns [`CipherError::OutOfAlphabet`] if the uppercased ciphertext has a
/// character outside the band.
pub fn caesar_decrypt(ciphertext: &str, offset: i32) -> Result<String, CipherError> {
    Caesar.decrypt(ciphertext, &offset)
}
