//! Word list loading utilities
//!
//! Provides functions to load word pools from files or from the embedded
//! constant. Pool words are lowercased so exclusion checks and hints behave
//! case-insensitively.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are skipped; words are trimmed and lowercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use rock_chain::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to an owned word pool
///
/// # Examples
/// ```
/// use rock_chain::wordlists::loader::words_from_slice;
/// use rock_chain::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_preserves_order() {
        let input = &["rock", "sock", "dock"];
        let words = words_from_slice(input);

        assert_eq!(words, ["rock", "sock", "dock"]);
    }

    #[test]
    fn words_from_slice_lowercases() {
        let input = &["Rock", "SOCK"];
        let words = words_from_slice(input);

        assert_eq!(words, ["rock", "sock"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
