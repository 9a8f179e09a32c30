//! Common interface for the substitution ciphers.

use crate::error::CipherError;

/// A reversible character substitution driven by a key.
///
/// Implementations are zero-sized and hold no state between calls, so a
/// single value may be shared freely across threads. Both directions
/// uppercase their input before transforming it.
pub trait Cipher {
    /// Key type accepted by the cipher.
    type Key: ?Sized;

    /// Encrypts `plaintext` under `key`.
    fn encrypt(&self, plaintext: &str, key: &Self::Key) -> Result<String, CipherError>;

    /// Decrypts `ciphertext` under `key`.
    fn decrypt(&self, ciphertext: &str, key: &Self::Key) -> Result<String, CipherError>;
}
