//! Nonsense (garbled input) checker
//!
//! Measures the fraction of real-looking words the common-word set does not
//! recognize. The threshold is deliberately low: genuine keyboard mash and
//! heavy typos get caught, while short textspeak stays the spelling
//! checker's problem (tokens under three letters are never sampled).

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use crate::responses;
use crate::wordlist::WordList;

lazy_static! {
    /// Alphabetic tokens of length >= 3
    static ref WORD_TOKEN: Regex = Regex::new(r"\b[a-z]{3,}\b").unwrap();
}

/// Check normalized text for garbled input.
///
/// Returns nothing when no assessable tokens exist or the unknown-word
/// fraction stays at or below `threshold`.
pub fn check<R: Rng>(
    normalized: &str,
    words: &WordList,
    threshold: f64,
    rng: &mut R,
) -> Option<String> {
    let tokens: Vec<&str> = WORD_TOKEN
        .find_iter(normalized)
        .map(|m| m.as_str())
        .collect();
    if tokens.is_empty() {
        return None;
    }

    let unknown = tokens.iter().filter(|t| !words.is_common(t)).count();
    let fraction = unknown as f64 / tokens.len() as f64;

    if fraction > threshold {
        Some(responses::pick(rng, responses::GARBLED).to_string())
    } else {
        None
    }
}
