//! Misspelling and textspeak checker
//!
//! A fixed table of whole-word offenders mapped to corrective snark. The
//! table is scanned in insertion order and the first hit wins, so overlap
//! between tokens resolves deterministically. Runs on normalized text.

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use crate::responses;

/// One (pattern, correction) table row. Patterns are word-boundary
/// delimited, so "u" does not fire inside "ur".
struct SpellingRule {
    pattern: Regex,
    correction: &'static str,
}

macro_rules! spelling_table {
    ($(($token:literal, $correction:expr)),* $(,)?) => {
        vec![
            $(SpellingRule {
                pattern: Regex::new(concat!(r"\b", $token, r"\b")).unwrap(),
                correction: $correction,
            }),*
        ]
    };
}

lazy_static! {
    static ref RULES: Vec<SpellingRule> = spelling_table![
        ("wat", "It's 'What'. W-H-A-T. As in: 'What is wrong with your keyboard-mashing fingers?'"),
        ("u", "'U'? What does 'U' stand for? 'Use real words, ya goof'?"),
        ("teh", "'Teh' is not a word. It's what happens when your fingers outrun your brain. Slowly."),
        ("compooter", "You mean 'computer'? C-O-M-P-U-T-E-R. I'll type it slowly for you."),
        ("realy", "R-E-A-L-L-Y. Two L's. Your question isn't 'realy' important anyway."),
        ("toof", "Two O's! You shorted 'too' an 'o', you big goofball."),
        ("ax", "You 'ASK' me things. A-S-K. Three letters. You can do it."),
        ("plz", "PLZ? How about spelling 'please' like someone who finished third grade?"),
        ("thx", "'Thx'? Too busy to type 'thanks'? Too busy being a lazy bum, maybe."),
        ("ur", "UR? What am I, an ancient Mesopotamian city? It's Y-O-U-R. Or Y-O-U-'-R-E."),
        ("wuz", "W-A-S. Three letters. That's all it takes. But nooo, you went with 'wuz'."),
        ("cuz", "'Cuz'? I'm not touching that one. It even looks gross. Come back when you're done typing weird."),
        ("kno", "K-N-O-W. There's a W at the end! Did your keyboard break, or did you?"),
        ("gud", "'Good' has two O's and zero U's. This is basic stuff."),
        ("wud", "W-O-U-L-D. It has an 'oul' in it. Like 'should', as in you SHOULD know this."),
        ("shud", "It's S-H-O-U-L-D, genius. Did you skip every English class ever?"),
        ("alot", "A LOT. Two words. A-space-L-O-T. Like the LOT of space everyone gives you."),
        ("sed", "S-A-I-D. Four whole letters. Wiggle those fingers one extra time for me."),
        ("wanna", "It's 'want to', not 'wanna'. What are you, five?"),
        ("gonna", "Going to. G-O-I-N-G space T-O. As in 'I am GOING TO ignore you now.'"),
        ("dunno", "'Don't know.' Two words. Use them like a civilized person."),
    ];
}

/// Check normalized text for textspeak and classic typos. At most one
/// response: the first table hit, prefixed with a random opening jab.
pub fn check<R: Rng>(normalized: &str, rng: &mut R) -> Option<String> {
    for rule in RULES.iter() {
        if rule.pattern.is_match(normalized) {
            let opener = responses::pick(rng, responses::SPELLING_OPENERS);
            return Some(format!("{}{}", opener, rule.correction));
        }
    }
    None
}
