//! Bellaso cipher: a running key shifts each character by its own amount.
//!
//! The seed is expanded to the message length by [`expand_key`], then each
//! message character `c` is paired with the key character `k` at the same
//! position:
//!
//! ```text
//! encrypt: n = (c + (k - 32)) mod 64 + 32
//! decrypt: n = (c - (k - 32)) mod 64 + 32
//! ```
//!
//! `mod` is the Euclidean remainder, so every output character lies in the
//! band whatever the input. Round trips are exact for in-band messages.

use crate::alphabet::{LOWER, RANGE};
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::key::expand_key;

/// The Bellaso cipher. The key is a non-empty seed string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bellaso;

impl Bellaso {
    /// Applies the running key in the given direction (`1` to encrypt, `-1`
    /// to decrypt).
    ///
    /// The message is uppercased before its length is taken; the expanded
    /// key is uppercased after expansion.
    fn apply(text: &str, seed: &str, direction: i64) -> Result<String, CipherError> {
        let text = text.to_uppercase();
        let len = text.chars().count();
        let key = expand_key(len, seed)?.to_uppercase();
        tracing::trace!(len, seed_len = seed.chars().count(), direction, "bellaso apply");

        let lower = LOWER as i64;
        let range = i64::from(RANGE);
        Ok(text
            .chars()
            .zip(key.chars())
            .map(|(c, k)| {
                let n = (c as i64 + direction * (k as i64 - lower)).rem_euclid(range) + lower;
                char::from(n as u8)
            })
            .collect())
    }
}

impl Cipher for Bellaso {
    type Key = str;

    /// # Errors
    /// Returns [`CipherError::EmptyKey`] if `key` is empty.
    fn encrypt(&self, plaintext: &str, key: &str) -> Result<String, CipherError> {
        Self::apply(plaintext, key, 1)
    }

    /// # Errors
    /// Returns [`CipherError::EmptyKey`] if `key` is empty.
    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String, CipherError> {
        Self::apply(ciphertext, key, -1)
    }
}

/// Encrypts `plaintext` with the Bellaso cipher under the running key `seed`.
///
/// # Examples
///
/// ```
/// let enc = classicrypt::bellaso_encrypt("hello world", "KEY").unwrap();
/// assert_eq!(enc, "SJ%WT9\"T+WI");
/// assert_eq!(classicrypt::bellaso_decrypt(&enc, "key").unwrap(), "HELLO WORLD");
/// ```
///
/// # Errors
/// Returns [`CipherError::EmptyKey`] if `seed` is empty.
pub fn bellaso_encrypt(plaintext: &str, seed: &str) -> Result<String, CipherError> {
    Bellaso.encrypt(plaintext, seed)
}

/// Decrypts `ciphertext` with the Bellaso cipher under the running key `seed`.
///
/// # Errors
/// Returns [`CipherError::EmptyKey`] if `seed` is empty.
pub fn bellaso_decrypt(ciphertext: &str, seed: &str) -> Result<String, CipherError> {
    Bellaso.decrypt(ciphertext, seed)
}
