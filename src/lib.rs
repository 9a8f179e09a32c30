//! Classical substitution ciphers over a 64-symbol ASCII band.
//!
//! Two reversible, deliberately weak ciphers for teaching purposes:
//!
//! - **Caesar**: every character is shifted by the same signed offset.
//! - **Bellaso**: a running key, repeated to the length of the message,
//!   shifts each character by its own amount (the cipher usually credited to
//!   Vigenère).
//!
//! Both operate on the band of ASCII codes from `' '` (32) to `'_'` (95) and
//! uppercase their input first. Every operation is a pure function: nothing
//! is cached, and the expanded key is rebuilt on each call.
//!
//! This is not encryption in any modern sense and must not protect real data.
//!
//! # Architecture
//!
//! ```text
//! alphabet  (band constants, bounds validation)
//! key       (running key expansion)
//!     ↓
//! Caesar    (validates, then constant shift with the legacy 65/59 wrap)
//! Bellaso   (expands key, then per-position shift modulo 64)
//! ```
//!
//! # Examples
//!
//! ```
//! use classicrypt::{bellaso_decrypt, bellaso_encrypt, caesar_decrypt, caesar_encrypt};
//!
//! let enc = caesar_encrypt("hello user", 1).unwrap();
//! assert_eq!(enc, "IFMMP!VTFS");
//! assert_eq!(caesar_decrypt(&enc, 1).unwrap(), "HELLO USER");
//!
//! let enc = bellaso_encrypt("THIS IS ANOTHER TEST", "CMSC203").unwrap();
//! assert_eq!(bellaso_decrypt(&enc, "CMSC203").unwrap(), "THIS IS ANOTHER TEST");
//! ```
//!
//! Both ciphers implement [`Cipher`], so they can be driven generically:
//!
//! ```
//! use classicrypt::{Bellaso, Caesar, Cipher, CipherError};
//!
//! fn roundtrip<C: Cipher + ?Sized>(c: &C, text: &str, key: &C::Key) -> Result<String, CipherError> {
//!     c.decrypt(&c.encrypt(text, key)?, key)
//! }
//!
//! assert_eq!(roundtrip(&Caesar, "ABC", &2).unwrap(), "ABC");
//! assert_eq!(roundtrip(&Bellaso, "ABC", "XY").unwrap(), "ABC");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod bellaso;
mod caesar;
mod cipher;
mod key;

pub use alphabet::{check_bounds, is_in_bounds};
pub use bellaso::{bellaso_decrypt, bellaso_encrypt, Bellaso};
pub use caesar::{caesar_decrypt, caesar_encrypt, Caesar, CAESAR_ANCHOR, CAESAR_MODULUS};
pub use cipher::Cipher;
pub use error::CipherError;
pub use key::expand_key;
