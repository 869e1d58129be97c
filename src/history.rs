//! Conversation history and repeat detection
//!
//! Tracks how often each normalized input has been submitted and keeps a
//! bounded window of recent submissions. One `ConversationHistory` belongs
//! to exactly one engine instance; there is no global state.

use std::collections::{HashMap, VecDeque};

/// Escalation level for a repeated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatTier {
    /// Second time: mild annoyance
    Mild,
    /// Third time: elevated anger
    Elevated,
    /// Fourth and beyond: dismissive
    Terminal,
}

impl RepeatTier {
    /// Map an occurrence count to its escalation tier.
    ///
    /// A count of 1 is a first sight, not a repeat.
    pub fn for_count(count: u32) -> Option<RepeatTier> {
        match count {
            0 | 1 => None,
            2 => Some(RepeatTier::Mild),
            3 => Some(RepeatTier::Elevated),
            _ => Some(RepeatTier::Terminal),
        }
    }
}

/// Result of observing one submission.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    pub is_repeat: bool,
    /// Occurrence count including this submission (always >= 1)
    pub count: u32,
}

/// Per-conversation submission history.
///
/// `counts` grows without bound for the life of the conversation; `recent`
/// is a FIFO window holding the last `window` first-sight submissions.
#[derive(Debug)]
pub struct ConversationHistory {
    counts: HashMap<String, u32>,
    recent: VecDeque<String>,
    window: usize,
}

impl ConversationHistory {
    pub fn new(window: usize) -> Self {
        Self {
            counts: HashMap::new(),
            recent: VecDeque::with_capacity(window),
            window,
        }
    }

    /// Record a submission and report whether it is a repeat.
    ///
    /// The count increments unconditionally, including on first sight.
    /// A submission is a repeat if it was seen before globally or sits in
    /// the recency window. The window is pushed only on first sight, after
    /// repeat status is decided, so it reflects distinct submissions.
    pub fn observe(&mut self, normalized: &str) -> Observation {
        let seen_recently = self.recent.iter().any(|s| s == normalized);

        let count = self.counts.entry(normalized.to_string()).or_insert(0);
        *count += 1;
        let count = *count;

        let is_repeat = seen_recently || count > 1;

        if !is_repeat {
            if self.recent.len() == self.window {
                self.recent.pop_front();
            }
            self.recent.push_back(normalized.to_string());
        }

        Observation { is_repeat, count }
    }

    /// How many times this exact normalized input has been seen.
    pub fn count_of(&self, normalized: &str) -> u32 {
        self.counts.get(normalized).copied().unwrap_or(0)
    }

    /// Number of entries currently in the recency window.
    pub fn recent_len(&self) -> usize {
        self.recent.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sight_is_not_repeat() {
        let mut history = ConversationHistory::new(10);
        let obs = history.observe("hello?");
        assert!(!obs.is_repeat);
        assert_eq!(obs.count, 1);
    }

    #[test]
    fn test_second_sight_is_repeat() {
        let mut history = ConversationHistory::new(10);
        history.observe("hello?");
        let obs = history.observe("hello?");
        assert!(obs.is_repeat);
        assert_eq!(obs.count, 2);
    }

    #[test]
    fn test_counts_survive_window_eviction() {
        let mut history = ConversationHistory::new(2);
        history.observe("one?");
        history.observe("two?");
        history.observe("three?"); // evicts "one?" from the window
        assert_eq!(history.recent_len(), 2);

        // Still a repeat: the global count remembers what the window forgot
        let obs = history.observe("one?");
        assert!(obs.is_repeat);
        assert_eq!(obs.count, 2);
    }

    #[test]
    fn test_interleaved_repeats() {
        let mut history = ConversationHistory::new(10);
        history.observe("a?");
        history.observe("b?");
        history.observe("c?");
        let obs = history.observe("a?");
        assert!(obs.is_repeat);
    }

    #[test]
    fn test_window_only_holds_distinct_entries() {
        let mut history = ConversationHistory::new(10);
        history.observe("same?");
        history.observe("same?");
        history.observe("same?");
        assert_eq!(history.recent_len(), 1);
        assert_eq!(history.count_of("same?"), 3);
    }

    #[test]
    fn test_tier_mapping() {
        assert_eq!(RepeatTier::for_count(1), None);
        assert_eq!(RepeatTier::for_count(2), Some(RepeatTier::Mild));
        assert_eq!(RepeatTier::for_count(3), Some(RepeatTier::Elevated));
        assert_eq!(RepeatTier::for_count(4), Some(RepeatTier::Terminal));
        assert_eq!(RepeatTier::for_count(17), Some(RepeatTier::Terminal));
    }
}
