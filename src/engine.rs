//! Response engine
//!
//! Orchestrates the per-turn pipeline: pre-checks, sanitization, repeat
//! tracking, classification, and final random selection. One engine
//! instance owns one conversation's state; callers with concurrent
//! conversations create one engine each.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::checks;
use crate::config::EngineConfig;
use crate::error::SnarkResult;
use crate::history::{ConversationHistory, RepeatTier};
use crate::responses;
use crate::wordlist::WordList;

/// A sarcastic canned-response engine for one conversation.
///
/// Generic over the PRNG type `R` so tests can seed it; production code
/// uses [`SnarkEngine::new`] with an entropy-seeded [`SmallRng`].
pub struct SnarkEngine<R: Rng> {
    config: EngineConfig,
    history: ConversationHistory,
    words: WordList,
    rng: R,
}

impl SnarkEngine<SmallRng> {
    /// Create an engine with default config and the default word-list
    /// search chain. Fails if no common-word list can be loaded.
    pub fn new() -> SnarkResult<Self> {
        let config = EngineConfig::default();
        let words = WordList::find_default(config.wordlist_path.as_deref())?;
        Ok(Self::with_rng(config, words, SmallRng::from_entropy()))
    }

    /// Create an engine from an explicit config.
    pub fn from_config(config: EngineConfig) -> SnarkResult<Self> {
        let words = WordList::find_default(config.wordlist_path.as_deref())?;
        Ok(Self::with_rng(config, words, SmallRng::from_entropy()))
    }
}

impl<R: Rng> SnarkEngine<R> {
    /// Create an engine with explicit parts. Used by tests to inject a
    /// seeded RNG and a controlled word list.
    pub fn with_rng(config: EngineConfig, words: WordList, rng: R) -> Self {
        info!(
            "🤖 Snark engine ready ({} common words, window {})",
            words.len(),
            config.history_window
        );
        let history = ConversationHistory::new(config.history_window);
        Self {
            config,
            history,
            words,
            rng,
        }
    }

    /// A random greeting. Stateless: consumes no input and records nothing.
    pub fn opening_prompt(&mut self) -> String {
        responses::pick(&mut self.rng, responses::GREETINGS).to_string()
    }

    /// Produce one response for one submission.
    ///
    /// Phase 1 pre-checks reject oversized, empty, and over-verbose input
    /// without touching history. Phase 2 tracks repeats and escalates.
    /// Phase 3 classifies first-sight input and picks one candidate
    /// uniformly at random, falling back to the default pool.
    pub fn get_response(&mut self, raw: &str) -> String {
        // --- Phase 1: pre-checks (no history mutation) ---
        if raw.chars().count() > self.config.hard_cap {
            debug!("Input over hard cap ({} chars)", raw.chars().count());
            return responses::TOO_LONG.to_string();
        }

        let sanitized = crate::sanitize::sanitize(raw, self.config.max_len);
        if sanitized.is_empty() {
            return responses::EMPTY_INPUT.to_string();
        }

        if sanitized.chars().count() > self.config.verbose_limit {
            debug!("Input over verbosity limit");
            return responses::pick(&mut self.rng, responses::TOO_VERBOSE).to_string();
        }

        // --- Phase 2: repeat tracking ---
        let normalized = sanitized.to_lowercase();
        let observation = self.history.observe(&normalized);
        if observation.is_repeat {
            let tier =
                RepeatTier::for_count(observation.count).unwrap_or(RepeatTier::Terminal);
            debug!("Repeat #{} -> {:?}", observation.count, tier);
            return responses::pick(&mut self.rng, responses::repeat_pool(tier)).to_string();
        }

        // --- Phase 3: classification ---
        let pool = checks::classify(
            &sanitized,
            &normalized,
            &self.words,
            self.config.nonsense_threshold,
            &mut self.rng,
        );
        debug!("Candidate pool holds {} responses", pool.len());

        if pool.is_empty() {
            responses::pick(&mut self.rng, responses::DEFAULTS).to_string()
        } else {
            let idx = self.rng.gen_range(0..pool.len());
            pool[idx].clone()
        }
    }

    /// How many times this exact input (after sanitize + lowercase) has
    /// been submitted.
    pub fn times_seen(&self, raw: &str) -> u32 {
        let normalized = crate::sanitize::sanitize(raw, self.config.max_len).to_lowercase();
        self.history.count_of(&normalized)
    }
}
