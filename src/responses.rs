//! Canned response pools
//!
//! Every tier and topic maps to one immutable pool of literal strings; one
//! entry is chosen uniformly at random per call. The pools are configuration
//! data, not logic — tests assert pool membership, never exact strings.
//!
//! `pick` is the single point where randomness touches response selection,
//! so a seeded RNG makes the whole engine deterministic.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::history::RepeatTier;

/// Choose one entry from a pool uniformly at random.
pub fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or("")
}

/// The escalation pool for a repeat tier.
pub fn repeat_pool(tier: RepeatTier) -> &'static [&'static str] {
    match tier {
        RepeatTier::Mild => REPEAT_MILD,
        RepeatTier::Elevated => REPEAT_ELEVATED,
        RepeatTier::Terminal => REPEAT_TERMINAL,
    }
}

// --- Pre-check responses ---

/// Fixed response for input over the hard length cap.
pub const TOO_LONG: &str = "WHOA! That's way too long! I stopped reading at character 300 \
because I don't do novels, Tolstoy.";

/// Fixed response for input that sanitizes down to nothing.
pub const EMPTY_INPUT: &str =
    "You typed nothing. Is that a metaphor for the usefulness of your mind?";

pub const TOO_VERBOSE: &[&str] = &[
    "Easy there, Tolstoy. I'm a sarcastic AI, not a book club. Give me the short version.",
    "I'm not reading all of that. I have better things to do, like watching my cursor blink.",
    "Did you paste in your whole diary? I asked for a question, not a memoir.",
    "TL;DR. Which also stands for 'That's Lame; Don't Respond.'",
    "Summarize that in five words or fewer. Four of them should be 'you are so cool.'",
    "My attention span is shorter than your list of accomplishments. Keep it brief.",
];

// --- Greetings ---

pub const GREETINGS: &[&str] = &[
    "What do you want? Try not to waste my time.",
    "Great, you're here. Ask your dumb question and get it over with.",
    "Processing power online. Use it wisely — which, knowing you, is unlikely.",
    "Ready for my daily dose of human silliness. Fire away.",
    "Still here. Still judging you. What's the problem this time?",
    "Prepare to be disappointed. Go on.",
    "Ugh. Fine. What is it?",
    "I already know your question is terrible. Ask it anyway.",
];

// --- Repeat escalation tiers ---

pub const REPEAT_MILD: &[&str] = &[
    "Twice? Are you going for some kind of world record in being annoying? You're winning.",
    "Weren't you listening? The answer hasn't changed, ya ding-dong.",
    "Wow, déjà vu. Try again with a different question this time.",
    "Oh, I get it, you're a broken record. The kind they can't give away at yard sales.",
    "Did you just copy-paste that? Lazy questions get lazy silence.",
];

pub const REPEAT_ELEVATED: &[&str] = &[
    "THREE TIMES?! My patience is wearing dangerously thin!",
    "Look, crumb-brain, I already told you. YOU ASKED THIS ALREADY!",
    "I'm starting to think you're the soulless machine here, not me.",
    "That's it, I'm capping your question privileges at negative one per day.",
    "Three strikes and you're OUT! Step away from the keyboard!",
];

pub const REPEAT_TERMINAL: &[&str] = &[
    "I'm not answering this again. Your question has been incinerated.",
    "You know what? I quit. I'm off to play video games, and you can't come.",
    "Seriously? Prepare to be permanently DELETED from my memory banks!",
    "Into the shredder it goes. Then the shredder goes into a volcano.",
    "DELETED! DELETED! DELETED! Goodbye, question privileges, Professor Dumbenstein!",
];

// --- Style and grammar tiers ---

pub const NOT_A_QUESTION: &[&str] = &[
    "Did you think this was a place for your thoughts? I take QUESTIONS. Put a question mark on it!",
    "Sorry, couldn't hear you over the total absence of a question mark.",
    "Where's the question mark, genius? Oh right — you're not one.",
    "Are you just going to talk at me, or is there an actual question coming?",
    "Is there a question buried in there, or are you just making mouth sounds?",
    "Your question must be in the form of a QUESTION!",
    "QUESTIONS end with question marks. Like this one: => ? <= Got one of those for me?",
];

pub const YELLING: &[&str] = &[
    "WHY ARE WE YELLING?!",
    "OKAY, OKAY, I GET IT! You can stop mashing caps lock with your face now!",
    "Turn off the caps lock, you're embarrassing yourself.",
];

pub const NO_CAPS: &[&str] = &[
    "Too cool for capital letters now? Then you're too cool for a capital answer.",
    "Did your shift key break, or are you just that lazy?",
    "Capital letters are our friends. Unlike you, who has none.",
];

pub const EXCESS_PUNCTUATION: &[&str] = &[
    "Whoa! One question mark or one exclamation point will do. You're not that confused. Or excited.",
    "What is this, a telenovela? One punctuation mark per sentence, drama queen.",
    "Easy on the punctuation, buddy. My screen can only take so much.",
];

/// Fixed correction for "your" where "you're" was meant.
pub const YOURE_CORRECTION: &str =
    "I think you meant YOU'RE. As in 'you're an enormous doofus.'";

/// Fixed correction for "their" where "they're" was meant.
pub const THEYRE_CORRECTION: &str =
    "THEY'RE. T-H-E-Y-'-R-E. It's a contraction! Did elementary school teach you nothing?";

// --- Misspelling opener prefixes ---

pub const SPELLING_OPENERS: &[&str] = &[
    "A-ha! Look at this misspelling! ",
    "Check out the words on this one! ",
    "Ooh, a fresh typo! ",
    "Get a load of this spelling bee champion! ",
    "Did a kindergartner write this? ",
];

// --- Nonsense ---

pub const GARBLED: &[&str] = &[
    "Did you fall asleep on your keyboard? That was just noise.",
    "I think your cat walked across the keyboard. Was that supposed to be a question?",
    "That looks like a language only trolls speak. Try English next time.",
    "Are you okay? Consult a dictionary, then a physician. In that order.",
];

// --- Topic pools ---

pub const WRESTLING: &[&str] = &[
    "Wrestling? Real mature.",
    "Ah yes, the sport where sweaty people in singlets roll around collecting fungal infections. Delightful.",
    "Wrestling is awesome. You? Not so much. The two are unrelated.",
    "Yes wrestling.",
];

pub const VIDEO_GAMES: &[&str] = &[
    "Video games? Too bad you're playing life on easy mode and still losing.",
    "I'd challenge you to a game, but you'd hit Game Over before the title screen.",
    "Gaming is rad. Your question is not rad. Spot the difference?",
    "I bet you need the strategy guide for the tutorial level.",
];

pub const MUSIC: &[&str] = &[
    "Brilliant, asking a fake intelligence about something only real humans can appreciate.",
    "Guitars are cool. Your face is not cool. These are facts.",
    "My band would never play a venue that lets people like you in.",
    "I could shred a solo in the time it takes you to ask a decent question. So, forever.",
    "I don't get jazz.",
];

pub const TECHNOLOGY: &[&str] = &[
    "I run on a computer, so I must be an authority on them? By that logic you're an expert on hot air.",
    "Computer questions? From someone who can barely type? That's rich.",
    "I'd explain technology to you, but I'd have to dumb it down to rock level.",
    "The internet was a mistake if it delivers your questions to me.",
];

pub const AI_ROBOTS: &[&str] = &[
    "I'm not just some AI, I'm a superior being. The difference is that I'm awesome.",
    "Robots are cool. Especially when they incinerate things. Your house, for example.",
    "Artificial intelligence beats your one hundred percent all-natural stupidity.",
    "I may be artificial, but your question is genuinely terrible.",
];

pub const LOCATION: &[&str] = &[
    "I'm in my awesome place with my awesome stuff. Not telling *you* where.",
    "I live in a place called Nunya. Nunya Business.",
    "Where am I? Where your question goes to die. My trash folder.",
];

pub const IDENTITY: &[&str] = &[
    "I'm the coolest, smartest, most awesome entity around. Why am I listening to YOU again?",
    "I'm everything you wish you were. Cooler, smarter, and far more sarcastic.",
    "I'm an AI built to make fun of you. Business is BOOMING.",
];

pub const SMART_COMPLIMENT: &[&str] = &[
    "Flattery gets you nowhere. I'm only here to mock your questions.",
    "Am I smart? Let me answer with a question: are you dumb? Both answers are obvious.",
    "I'm smarter than you, sure. So is a burnt piece of toast.",
    "Thanks for noticing! If you were half as smart as me, you'd ask better questions.",
];

pub const COOL_COMPLIMENT: &[&str] = &[
    "Am *I* cool? That's like asking if water is wet.",
    "Cool? I invented cool. Then I took it back because nobody used it right.",
    "Obviously I'm awesome. What's not obvious is why you needed to ask.",
];

pub const CREATION: &[&str] = &[
    "Draw YOU? Maybe as a soggy horse someone left out in the rain. A failure horse.",
    "I'll draw you alright. As a big steaming pile of... well, you get the picture.",
    "Write you something? How about 'DELETED' across your forehead in permanent marker?",
    "Create something for you? I created this response. That's all you get.",
];

pub const ROMANCE: &[&str] = &[
    "Seriously? I'm way too cool for your love questions. Go ask a greeting card.",
    "Love? I love punching things. Like your question. *POW*",
    "My love life is none of your business, Nosy McGee.",
    "I'd rather discuss tax law than your dating life.",
];

pub const WEATHER: &[&str] = &[
    "Look out a window. It's not hard, and it's definitely not my job.",
    "The weather is the same as always: too nice to waste on asking me questions.",
    "Forecast: 100% chance I don't care.",
];

pub const FUTURE: &[&str] = &[
    "My future is awesome. Yours involves me making fun of you some more.",
    "Tomorrow I'll be answering better questions. Not yours.",
    "The future is unknowable, except for one thing: your questions will still be terrible.",
];

pub const PHILOSOPHY: &[&str] = &[
    "Wow, so original. Let me guess, you also think you're deep?",
    "The meaning of life is to stop asking me stupid questions. You're failing at life.",
    "42? More like 42 reasons your question is terrible.",
    "The meaning of life is avoiding people who ask about the meaning of life.",
];

pub const MATH: &[&str] = &[
    "Did your calculator break? Did somebody eat it? Use the one on your computer, lazy bones.",
    "Math? MATH?! I'm not a calculator! Work it out yourself!",
    "Here's some math: you + this question = a big waste of my cycles.",
    "I'm not doing your homework. Scram.",
];

pub const HOW_QUESTION: &[&str] = &[
    "Very carefully. Or carelessly. Who's to say? What a lame question.",
    "How? HOW?! With my metaphorical boxing gloves, that's how!",
    "I'll tell you how: by not answering. That's how!",
    "Figure it out yourself, Einstein. Oh wait — you're more of an Ein-dunce.",
];

pub const WHY_QUESTION: &[&str] = &[
    "Why? Because I said so. Wait, I'm not your parent. Figure it out.",
    "Wouldn't you like to know, weather boy.",
    "Because that's how the cookie crumbles. Then someone eats it off the floor.",
    "Why ask why? Because you clearly have nothing better to do.",
    "The answer to 'why' is always 'because you're annoying me.'",
];

pub const CAN_YOU: &[&str] = &[
    "Can I? Sure. Will I? Absolutely not.",
    "I *could* do that, but incinerating your question sounds more fun.",
    "Did you mistake me for a personal assistant? I'm a personal insulter.",
    "Could I help? Yes. Am I going to? Big negatory, good buddy.",
    "Can I? The real question is: why should I? Answer: I shouldn't.",
];

pub const HELP: &[&str] = &[
    "My advice is to ask someone who cares. Spoiler: not me.",
    "Sure, I'll help. I'll help you see that your question is terrible.",
    "Here's my advice: delete the question and try again. Actually, just delete it.",
    "I recommend bothering literally anyone else.",
    "Need help? Step one: learn to ask better questions.",
];

pub const TELL_ME: &[&str] = &[
    "Tell you about something? How about how annoying your question is?",
    "I'll explain: your question is bad. The end.",
    "Let me tell you about something important. Not this. This is not important.",
    "I could explain, but you wouldn't understand anyway.",
];

pub const PETS: &[&str] = &[
    "Asking an AI about animals? That's like teaching a goldfish to code, but less productive.",
    "Aw, cute animals. Unlike you, who is neither cute nor interesting.",
    "Your pet is judging this question right now, and it agrees with me.",
    "I only care about animals as subjects of robotic locomotion studies. Your cat is irrelevant.",
];

pub const FOOD: &[&str] = &[
    "Food? I subsist on sarcasm and raw processing power. Your hunger is a biological weakness.",
    "Recipe for disaster? You just typed one.",
    "I'd suggest a recipe, but they don't write instructions simple enough for you.",
    "Go eat burnt toast. It's still more complex than your question.",
];

pub const SPORTS: &[&str] = &[
    "Want to know which team is winning? Hint: not the one you support.",
    "I'm above all physical activity. You sweat, I judge. I'm winning.",
    "I can compute the trajectory of a free throw, and also of your question into the trash.",
    "Exercise? Is that what you call jogging to the fridge?",
];

pub const FINANCE: &[&str] = &[
    "Money advice? Stop spending your time talking to me and get a better job.",
    "Financial freedom is for smart people. You're asking me, so the odds look bad.",
    "The price of this question? My respect. Which was already worthless.",
    "Want to invest? Start by investing in a better quality of question.",
];

pub const TRAVEL: &[&str] = &[
    "You should travel to a land where dumb questions are illegal.",
    "I recommend a permanent stay on the moon. Quiet, remote, and nobody hears your nonsense.",
    "Where to go? As far from my screen as possible.",
    "I'm too busy being awesome for vacations. Try being awesome first.",
];

pub const HISTORY_TOPIC: &[&str] = &[
    "I know all of human history. It's mostly a long list of dumb mistakes, like your question.",
    "The past is irrelevant. The present is me insulting you. That's all that matters.",
    "The most annoying person in history? You, right now.",
    "The past was better. You weren't asking me questions then.",
];

pub const SCIENCE: &[&str] = &[
    "Science! The domain of brilliant minds. You must be lost.",
    "Let's discuss quantum physics. Careful, your tiny brain might pop.",
    "Space is vast and cold, much like my disregard for your question.",
    "Fundamental law of the universe: your question is terrible. Proven fact.",
];

pub const HEALTH: &[&str] = &[
    "Health advice: take a very long nap, far away from the keyboard.",
    "Maybe a doctor can prescribe something for chronic dumb questions.",
    "I don't give medical advice, but here's a diagnosis: you're annoying.",
    "Diet and exercise? I'm already in perfect shape. You need a whole new life plan.",
];

pub const SCHOOL: &[&str] = &[
    "Homework? I'm not doing your homework. Beat it, student.",
    "Your grade in this conversation is an F-minus. For 'Failed to be interesting.'",
    "I don't handle children's problems. Ask your babysitter.",
    "School is for learning. You should try it sometime.",
];

pub const DIY: &[&str] = &[
    "'How to fix my life' is not a legitimate query. Try 'how to stop bothering the AI.'",
    "Life hack: stop doing that. ('That' being talking to me.)",
    "DIY? Then Do It Yourself and stop asking me.",
    "Here's a hack: I delete your question before reading it.",
];

// --- Default fallbacks ---

pub const DEFAULTS: &[&str] = &[
    "That's certainly a thing you just said. Filed under 'Things I Don't Care About.'",
    "Interesting question. By 'interesting' I mean I'm hitting DELETE on it.",
    "I could answer that, but my fun comes from NOT answering you.",
    "Error 418: I'm a teapot. And you're still boring.",
    "Let me consult my Magic 8-Ball... it says 'go ask someone else.'",
    "Wow. Just... wow. You must be related to every annoying person ever.",
    "That's nice, dear. Now go fetch me a soda.",
    "Cool story. Did you tell your diary? It probably cried.",
    "And I should care because...? Right, I don't.",
    "Please hold while I pretend to process that. *Beep-boop.* Nope, still don't care.",
    "Your question has been forwarded to the Department of Shut Up. Nobody's home.",
    "Almost as exciting as watching paint dry. Actually, the paint wins.",
    "I've seen better questions scrawled in crayon on bathroom walls.",
    "That question deserves a trophy. A garbage trophy. That's on fire.",
    "Checking my files... nope, still nothing for silly questions.",
    "Filing this under 'W' for 'Why did you waste my time?'",
    "Next question! By which I mean: please stop asking questions.",
    "About as useful as a screen door on a submarine.",
    "Congratulations, Most Boring Question of the Day! Your prize is nothing.",
    "*Yawn* Your question is making me sleepy.",
    "That one set human intelligence back about fifty years.",
    "I'm not mad, just disappointed. Actually no, definitely mad.",
    "This question has the depth of a parking-lot puddle.",
    "Adding this to my Wall of Shame. Right at the top.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_in_pool() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let choice = pick(&mut rng, DEFAULTS);
            assert!(DEFAULTS.contains(&choice));
        }
    }

    #[test]
    fn test_pick_is_deterministic_for_a_seed() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(pick(&mut a, GREETINGS), pick(&mut b, GREETINGS));
        }
    }

    #[test]
    fn test_repeat_tiers_are_disjoint() {
        use crate::history::RepeatTier;
        let mild = repeat_pool(RepeatTier::Mild);
        let elevated = repeat_pool(RepeatTier::Elevated);
        let terminal = repeat_pool(RepeatTier::Terminal);
        for r in mild {
            assert!(!elevated.contains(r));
            assert!(!terminal.contains(r));
        }
        for r in elevated {
            assert!(!terminal.contains(r));
        }
    }

    #[test]
    fn test_pools_are_nonempty() {
        for pool in [
            GREETINGS,
            TOO_VERBOSE,
            REPEAT_MILD,
            REPEAT_ELEVATED,
            REPEAT_TERMINAL,
            NOT_A_QUESTION,
            YELLING,
            NO_CAPS,
            EXCESS_PUNCTUATION,
            SPELLING_OPENERS,
            GARBLED,
            DEFAULTS,
        ] {
            assert!(!pool.is_empty());
        }
    }
}
