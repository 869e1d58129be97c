//! Lexical classifiers
//!
//! Each checker is a pure function over (possibly normalized) text that
//! contributes zero, one, or many candidate responses. The engine gathers
//! every contribution into one pool and picks a single winner at random.

pub mod keywords;
pub mod nonsense;
pub mod spelling;
pub mod style;

use rand::Rng;

use crate::wordlist::WordList;

/// Run every checker and aggregate the candidate pool for one submission.
///
/// Style runs on the raw (case-preserving) sanitized text; the rest run on
/// the normalized form. Order here does not affect the outcome: the final
/// selection is uniform over all candidates.
pub fn classify<R: Rng>(
    raw: &str,
    normalized: &str,
    words: &WordList,
    nonsense_threshold: f64,
    rng: &mut R,
) -> Vec<String> {
    let mut pool = Vec::new();

    if let Some(response) = style::check(raw, rng) {
        pool.push(response);
    }
    if let Some(response) = spelling::check(normalized, rng) {
        pool.push(response);
    }
    if let Some(response) = nonsense::check(normalized, words, nonsense_threshold, rng) {
        pool.push(response);
    }
    if let Some(responses) = keywords::check(normalized) {
        pool.extend(responses.into_iter().map(String::from));
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn words() -> WordList {
        WordList::from_text("what\nis\nthe\nbest\nkind\nof\ncheese\nand\nwhy")
    }

    #[test]
    fn test_multiple_checkers_contribute() {
        let mut rng = SmallRng::seed_from_u64(3);
        // Lowercase, no punctuation, "why" prefix: style fires and so does
        // the why-topic rule. The pool holds both contributions.
        let text = "why is the best cheese the best cheese";
        let pool = classify(text, text, &words(), 0.05, &mut rng);
        assert!(pool.len() >= 2, "expected style + topic candidates, got {pool:?}");
    }

    #[test]
    fn test_clean_input_yields_empty_pool() {
        let mut rng = SmallRng::seed_from_u64(3);
        let raw = "What is the best kind of cheese?";
        let pool = classify(raw, &raw.to_lowercase(), &words(), 0.05, &mut rng);
        assert!(pool.is_empty(), "unexpected candidates: {pool:?}");
    }
}
