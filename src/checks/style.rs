//! Style and grammar checker
//!
//! Evaluates an ordered rule table against the raw (case-preserving)
//! sanitized text and short-circuits on the first match, so a submission
//! draws at most one style complaint. Earlier rules win outright; the
//! table order IS the priority contract.

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use tracing::debug;

use crate::responses;

lazy_static! {
    /// "your" where "you're" was meant, before a predicate adjective
    static ref YOUR_MISUSE: Regex =
        Regex::new(r"(?i)\byour\s+(wrong|stupid|dumb|bad|lame|the worst)\b").unwrap();

    /// "their" where "they're" was meant
    static ref THEIR_MISUSE: Regex =
        Regex::new(r"(?i)\btheir\s+(going|coming|is|was|are)\b").unwrap();
}

/// What a matched rule produces.
enum Outcome {
    /// One random entry from a tier pool
    Pool(&'static [&'static str]),
    /// A fixed correction string
    Fixed(&'static str),
}

struct StyleRule {
    name: &'static str,
    applies: fn(&str) -> bool,
    outcome: Outcome,
}

/// Ordered rule table. First match wins.
fn rules() -> &'static [StyleRule] {
    const RULES: &[StyleRule] = &[
        StyleRule {
            name: "not-a-question",
            applies: not_a_question,
            outcome: Outcome::Pool(responses::NOT_A_QUESTION),
        },
        StyleRule {
            name: "yelling",
            applies: is_yelling,
            outcome: Outcome::Pool(responses::YELLING),
        },
        StyleRule {
            name: "no-capitalization",
            applies: no_capitalization,
            outcome: Outcome::Pool(responses::NO_CAPS),
        },
        StyleRule {
            name: "excess-punctuation",
            applies: excess_punctuation,
            outcome: Outcome::Pool(responses::EXCESS_PUNCTUATION),
        },
        StyleRule {
            name: "your-youre",
            applies: |text| YOUR_MISUSE.is_match(text),
            outcome: Outcome::Fixed(responses::YOURE_CORRECTION),
        },
        StyleRule {
            name: "their-theyre",
            applies: |text| THEIR_MISUSE.is_match(text),
            outcome: Outcome::Fixed(responses::THEYRE_CORRECTION),
        },
    ];
    RULES
}

/// Check raw text for style and grammar defects. At most one response.
pub fn check<R: Rng>(raw: &str, rng: &mut R) -> Option<String> {
    for rule in rules() {
        if (rule.applies)(raw) {
            debug!("Style rule '{}' fired", rule.name);
            let response = match rule.outcome {
                Outcome::Pool(pool) => responses::pick(rng, pool),
                Outcome::Fixed(text) => text,
            };
            return Some(response.to_string());
        }
    }
    None
}

/// Longer than small talk but missing terminal punctuation.
fn not_a_question(text: &str) -> bool {
    text.chars().count() > 5
        && !matches!(text.trim_end().chars().last(), Some('?' | '!' | '.'))
}

/// All cased characters are uppercase (and there is at least one).
fn is_yelling(text: &str) -> bool {
    text.chars().count() > 5
        && text.chars().any(|c| c.is_uppercase())
        && !text.chars().any(|c| c.is_lowercase())
}

/// Contains lowercase letters but not a single capital.
fn no_capitalization(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_lowercase()) && !text.chars().any(|c| c.is_ascii_uppercase())
}

fn excess_punctuation(text: &str) -> bool {
    text.contains("???") || text.contains("!!!") || text.contains("?!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(11)
    }

    #[test]
    fn test_not_a_question() {
        let out = check("I like turtles", &mut rng()).expect("should fire");
        assert!(responses::NOT_A_QUESTION.contains(&out.as_str()));
    }

    #[test]
    fn test_short_text_exempt_from_punctuation_rule() {
        // Five characters or fewer never trips the not-a-question rule
        assert!(!not_a_question("hi"));
        assert!(!not_a_question("ok"));
    }

    #[test]
    fn test_yelling() {
        let out = check("WHERE IS MY SANDWICH?", &mut rng()).expect("should fire");
        assert!(responses::YELLING.contains(&out.as_str()));
    }

    #[test]
    fn test_rule_priority_not_a_question_beats_yelling() {
        // All caps AND missing punctuation: rule 1 is evaluated first
        let out = check("THIS IS ALL CAPS AND HAS NO PUNCT", &mut rng()).expect("should fire");
        assert!(
            responses::NOT_A_QUESTION.contains(&out.as_str()),
            "priority violated: got {out:?}"
        );
    }

    #[test]
    fn test_no_capitalization() {
        let out = check("is anyone out there?", &mut rng()).expect("should fire");
        assert!(responses::NO_CAPS.contains(&out.as_str()));
    }

    #[test]
    fn test_excess_punctuation() {
        let out = check("Are You Serious?!", &mut rng()).expect("should fire");
        assert!(responses::EXCESS_PUNCTUATION.contains(&out.as_str()));
    }

    #[test]
    fn test_your_youre_correction() {
        let out = check("I think Your Wrong about this.", &mut rng()).expect("should fire");
        assert_eq!(out, responses::YOURE_CORRECTION);
    }

    #[test]
    fn test_their_theyre_correction() {
        let out = check("Their Going to lose.", &mut rng()).expect("should fire");
        assert_eq!(out, responses::THEYRE_CORRECTION);
    }

    #[test]
    fn test_clean_text_passes() {
        assert!(check("What a Nice Day this is!", &mut rng()).is_none());
    }
}
