//! Keyword and topic checker
//!
//! Unlike the other checkers, topic rules are independent: every rule whose
//! pattern matches contributes its ENTIRE pool to the candidate list, so
//! multi-topic input draws from the union of all matched topics with equal
//! probability at final selection. Adding a topic is appending a table row.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::responses;

/// How one topic rule recognizes its subject.
enum Matcher {
    /// Word-bounded alternation (or any regex)
    Pattern(Regex),
    /// Plain substring
    Contains(&'static str),
    /// Text starts with this
    Prefix(&'static str),
}

impl Matcher {
    fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::Contains(needle) => text.contains(needle),
            Matcher::Prefix(prefix) => text.starts_with(prefix),
        }
    }
}

struct TopicRule {
    name: &'static str,
    matcher: Matcher,
    pool: &'static [&'static str],
}

fn rule(name: &'static str, pattern: &str, pool: &'static [&'static str]) -> TopicRule {
    TopicRule {
        name,
        matcher: Matcher::Pattern(Regex::new(pattern).unwrap()),
        pool,
    }
}

lazy_static! {
    static ref TOPIC_RULES: Vec<TopicRule> = vec![
        rule("wrestling", r"\b(wrestling|wrestle|wrestler|wwe|fighter)\b", responses::WRESTLING),
        rule(
            "video-games",
            r"\b(video game|game|gaming|nintendo|playstation|xbox|controller)\b",
            responses::VIDEO_GAMES,
        ),
        rule("music", r"\b(guitar|music|band|rock|metal|concert|song)\b", responses::MUSIC),
        rule(
            "technology",
            r"\b(computer|laptop|keyboard|mouse|internet|email|website)\b",
            responses::TECHNOLOGY,
        ),
        rule(
            "ai-robots",
            r"\b(ai|robot|artificial intelligence|machine learning|chatbot)\b",
            responses::AI_ROBOTS,
        ),
        rule(
            "location",
            r"\b(where are you|where do you live|your location)\b",
            responses::LOCATION,
        ),
        TopicRule {
            name: "identity",
            matcher: Matcher::Contains("what are you"),
            pool: responses::IDENTITY,
        },
        rule(
            "smart-compliment",
            r"\b(smart|good|great|awesome|genius|clever|brilliant)\b",
            responses::SMART_COMPLIMENT,
        ),
        rule("cool-compliment", r"\b(cool|awesome|rad|amazing|incredible)\b", responses::COOL_COMPLIMENT),
        rule("creation", r"\b(draw|write me|make me|create|design)\b", responses::CREATION),
        rule(
            "romance",
            r"\b(love|single|date|girlfriend|boyfriend|relationship|romance)\b",
            responses::ROMANCE,
        ),
        rule("weather", r"\b(weather|forecast|temperature|rain|snow|sunny)\b", responses::WEATHER),
        rule("future", r"\b(tomorrow|future|will happen|going to happen)\b", responses::FUTURE),
        rule("philosophy", r"\b(meaning of life|purpose|why exist|42)\b", responses::PHILOSOPHY),
        rule("math", r"\d+\s*[+\-*/]\s*\d+", responses::MATH),
        TopicRule {
            name: "how-question",
            matcher: Matcher::Prefix("how"),
            pool: responses::HOW_QUESTION,
        },
        TopicRule {
            name: "why-question",
            matcher: Matcher::Prefix("why"),
            pool: responses::WHY_QUESTION,
        },
        rule("can-you", r"\b(can you|could you|will you|would you)\b", responses::CAN_YOU),
        rule("help", r"\b(help|advice|suggest|recommend|assist|support)\b", responses::HELP),
        rule("tell-me", r"\b(tell me about|tell me|explain)\b", responses::TELL_ME),
        rule(
            "pets",
            r"\b(dog|cat|pet|animal|fish|hamster|bird|adopt|rescue|vet)\b",
            responses::PETS,
        ),
        rule(
            "food",
            r"\b(food|eat|cook|recipe|dinner|breakfast|snack|kitchen|ingredient)\b",
            responses::FOOD,
        ),
        rule(
            "sports",
            r"\b(sport|athlete|team|ball|score|nfl|nba|soccer|jump|exercise)\b",
            responses::SPORTS,
        ),
        rule(
            "finance",
            r"\b(money|cash|buy|cost|price|invest|stock|loan|budget|finance)\b",
            responses::FINANCE,
        ),
        rule(
            "travel",
            r"\b(travel|trip|vacation|flight|hotel|destination|where to go|tour)\b",
            responses::TRAVEL,
        ),
        rule(
            "history",
            r"\b(history|past|war|ancient|who was|when was)\b",
            responses::HISTORY_TOPIC,
        ),
        rule(
            "science",
            r"\b(science|physics|chemistry|quantum|universe|gravity|atom|space)\b",
            responses::SCIENCE,
        ),
        rule(
            "health",
            r"\b(health|body|sick|pain|doctor|workout|muscle|diet|weight)\b",
            responses::HEALTH,
        ),
        rule(
            "school",
            r"\b(school|kids|child|kindergarten|college|exam|homework|study|grade)\b",
            responses::SCHOOL,
        ),
        rule("diy", r"\b(fix|how to|diy|hack|repair|build|clean)\b", responses::DIY),
    ];
}

/// Check normalized text against every topic rule.
///
/// Returns the aggregated response list across all matched topics, or
/// nothing when no rule fires.
pub fn check(normalized: &str) -> Option<Vec<&'static str>> {
    let mut qualifying = Vec::new();

    for rule in TOPIC_RULES.iter() {
        if rule.matcher.matches(normalized) {
            debug!("Topic '{}' matched", rule.name);
            qualifying.extend_from_slice(rule.pool);
        }
    }

    if qualifying.is_empty() {
        None
    } else {
        Some(qualifying)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_topic() {
        let pool = check("do you like wrestling?").expect("should match");
        assert_eq!(pool.len(), responses::WRESTLING.len());
        for r in responses::WRESTLING {
            assert!(pool.contains(r));
        }
    }

    #[test]
    fn test_multi_topic_aggregation() {
        // "money" (finance) and "travel" both fire; the pool spans both
        let pool = check("is my travel money enough?").expect("should match");
        for r in responses::FINANCE {
            assert!(pool.contains(r), "finance pool missing");
        }
        for r in responses::TRAVEL {
            assert!(pool.contains(r), "travel pool missing");
        }
    }

    #[test]
    fn test_prefix_rules() {
        let pool = check("how do magnets work?").expect("should match");
        assert!(responses::HOW_QUESTION.iter().all(|r| pool.contains(r)));

        // "how" mid-sentence does not fire the prefix rule
        assert!(check("no idea about that").is_none());
    }

    #[test]
    fn test_arithmetic_detection() {
        let pool = check("3 + 4").expect("should match");
        assert!(responses::MATH.iter().all(|r| pool.contains(r)));
        assert!(check("i have 3 apples and 4 pears").is_none());
    }

    #[test]
    fn test_identity_substring() {
        let pool = check("so... what are you exactly?").expect("should match");
        assert!(responses::IDENTITY.iter().all(|r| pool.contains(r)));
    }

    #[test]
    fn test_no_topic_no_verdict() {
        assert!(check("the sky seems nice.").is_none());
    }
}
