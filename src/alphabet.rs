//! The 64-symbol alphabet band shared by both ciphers.
//!
//! The band is the contiguous run of ASCII codes from `' '` (32) to `'_'`
//! (95), which covers space, punctuation, digits and the uppercase letters.
//! Lowercase letters sit above the band, which is why every cipher uppercases
//! its input before doing anything else.

use crate::error::CipherError;

/// Lowest character of the band (space, code 32).
pub const LOWER: char = ' ';

/// Highest character of the band (underscore, code 95).
pub const UPPER: char = '_';

/// Number of symbols in the band.
pub const RANGE: u32 = UPPER as u32 - LOWER as u32 + 1;

/// Returns `true` if `c` lies within `LOWER..=UPPER`.
#[inline]
pub(crate) fn contains(c: char) -> bool {
    (LOWER..=UPPER).contains(&c)
}

/// Determines whether every character of `text` lies within the band.
///
/// The empty string is trivially in bounds.
///
/// # Parameters
/// - `text`: The string to inspect. No case folding is applied.
///
/// # Returns
/// `true` if all characters are within `LOWER..=UPPER`, `false` otherwise.
pub fn is_in_bounds(text: &str) -> bool {
    text.chars().all(contains)
}

/// Like [`is_in_bounds`], but reports the first offending character.
///
/// # Errors
/// Returns [`CipherError::OutOfAlphabet`] carrying the first character outside
/// the band and its char index.
pub fn check_bounds(text: &str) -> Result<(), CipherError> {
    match text.chars().enumerate().find(|&(_, c)| !contains(c)) {
        Some((position, character)) => Err(CipherError::OutOfAlphabet {
            character,
            position,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_64() {
        assert_eq!(RANGE, 64);
        assert_eq!(LOWER as u32, 32);
        assert_eq!(UPPER as u32, 95);
    }

    #[test]
    fn test_in_bounds_sentence() {
        assert!(is_in_bounds("THIS TEST WILL BE SUCCESSFUL"));
    }

    #[test]
    fn test_empty_is_in_bounds() {
        assert!(is_in_bounds(""));
        assert_eq!(check_bounds(""), Ok(()));
    }

    #[test]
    fn test_band_edges() {
        assert!(is_in_bounds(" _"));
        assert!(!is_in_bounds("\x1f"));
        assert!(!is_in_bounds("`"));
    }

    #[test]
    fn test_lowercase_is_out_of_bounds() {
        assert!(!is_in_bounds("This"));
    }

    #[test]
    fn test_non_ascii_is_out_of_bounds() {
        assert!(!is_in_bounds("CAFÉ"));
    }

    #[test]
    fn test_check_bounds_reports_first_offender() {
        assert_eq!(
            check_bounds("AB{C}"),
            Err(CipherError::OutOfAlphabet {
                character: '{',
                position: 2
            })
        );
    }

    #[test]
    fn test_check_bounds_counts_chars_not_bytes() {
        assert_eq!(
            check_bounds("ÉA~"),
            Err(CipherError::OutOfAlphabet {
                character: 'É',
                position: 0
            })
        );
        assert_eq!(
            check_bounds("A~É"),
            Err(CipherError::OutOfAlphabet {
                character: '~',
                position: 1
            })
        );
    }

    #[test]
    fn test_is_in_bounds_deterministic() {
        let text = "HELLO {WORLD}";
        let first = is_in_bounds(text);
        for _ in 0..10 {
            assert_eq!(is_in_bounds(text), first);
        }
    }
}
