//! Running key expansion for the Bellaso cipher.
//!
//! A short seed is stretched by cyclic repetition until it matches the
//! length of the message it will be applied to: position `p` of the expanded
//! key is `seed[p % seed.len()]`. Lengths are counted in chars.

use crate::error::CipherError;

/// Expands `seed` to exactly `text_len` characters by cyclic repetition.
///
/// A seed that already has `text_len` characters is returned unchanged. A
/// seed longer than `text_len` is truncated to its first `text_len`
/// characters.
///
/// # Parameters
/// - `text_len`: Length of the message, in chars.
/// - `seed`: The running key as supplied by the caller. No case folding is
///   applied here.
///
/// # Returns
/// The expanded key, `text_len` characters long.
///
/// # Errors
/// Returns [`CipherError::EmptyKey`] if `seed` is empty, whatever `text_len`.
pub fn expand_key(text_len: usize, seed: &str) -> Result<String, CipherError> {
    if seed.is_empty() {
        tracing::debug!(text_len, "rejecting empty running key");
        return Err(CipherError::EmptyKey);
    }
    Ok(seed.chars().cycle().take(text_len).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_repeats_seed() {
        assert_eq!(expand_key(7, "AB").unwrap(), "ABABABA");
    }

    #[test]
    fn test_expand_exact_length_unchanged() {
        assert_eq!(expand_key(6, "CMSC20").unwrap(), "CMSC20");
    }

    #[test]
    fn test_expand_truncates_long_seed() {
        assert_eq!(expand_key(3, "LEMON").unwrap(), "LEM");
    }

    #[test]
    fn test_expand_to_zero_length() {
        assert_eq!(expand_key(0, "KEY").unwrap(), "");
    }

    #[test]
    fn test_expand_empty_seed_rejected() {
        assert_eq!(expand_key(5, ""), Err(CipherError::EmptyKey));
        assert_eq!(expand_key(0, ""), Err(CipherError::EmptyKey));
    }

    #[test]
    fn test_expand_counts_chars() {
        let key = expand_key(5, "ÉX").unwrap();
        assert_eq!(key, "ÉXÉXÉ");
        assert_eq!(key.chars().count(), 5);
    }

    #[test]
    fn test_expand_matches_cyclic_index() {
        let seed: Vec<char> = "CMSC203".chars().collect();
        let key: Vec<char> = expand_key(40, "CMSC203").unwrap().chars().collect();
        assert_eq!(key.len(), 40);
        for (p, &c) in key.iter().enumerate() {
            assert_eq!(c, seed[p % seed.len()], "mismatch at position {}", p);
        }
    }
}
