//! Common-word lookup
//!
//! Read-only membership set backed by a frequency-ranked word list, loaded
//! once at engine construction. The nonsense checker cannot operate without
//! it, so a missing list is a hard startup error rather than a silent
//! degradation.

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{SnarkError, SnarkResult};

/// Environment variable overriding the word list location.
pub const WORDLIST_ENV: &str = "SNARKBOT_WORDLIST";

/// Immutable set of common words for one language.
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Build from newline-separated text (one word per line).
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { words }
    }

    /// Build from any reader of newline-separated words.
    pub fn from_reader<R: Read>(reader: R) -> SnarkResult<Self> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    /// Load a word list from a file path.
    pub fn load(path: &Path) -> SnarkResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            SnarkError::WordList(format!("cannot open {}: {}", path.display(), e))
        })?;
        let list = Self::from_reader(file)?;
        if list.is_empty() {
            return Err(SnarkError::WordList(format!(
                "word list {} is empty",
                path.display()
            )));
        }
        info!("📖 Loaded {} common words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Locate and load the word list from the default search chain:
    /// an explicit path, the environment override, the user data dir,
    /// then the bundled `data/` directory.
    pub fn find_default(explicit: Option<&Path>) -> SnarkResult<Self> {
        let candidates = [
            explicit.map(PathBuf::from),
            std::env::var_os(WORDLIST_ENV).map(PathBuf::from),
            dirs::data_dir().map(|p| p.join("snarkbot/common_words.txt")),
            Some(PathBuf::from("data/common_words.txt")),
        ];

        for path in candidates.iter().flatten() {
            if path.exists() {
                return Self::load(path);
            }
            debug!("No word list at {}", path.display());
        }

        Err(SnarkError::WordList(
            "no common-word list found; set SNARKBOT_WORDLIST or install data/common_words.txt"
                .to_string(),
        ))
    }

    /// Is this word common in the target language?
    pub fn is_common(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_text() {
        let list = WordList::from_text("apple\nBanana\n\n  pear  \n");
        assert_eq!(list.len(), 3);
        assert!(list.is_common("apple"));
        assert!(list.is_common("banana")); // lowercased on load
        assert!(list.is_common("pear"));
        assert!(!list.is_common("dragonfruit"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "hello\nworld").expect("write");
        let list = WordList::load(file.path()).expect("load");
        assert!(list.is_common("hello"));
        assert!(list.is_common("world"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = WordList::load(Path::new("/nonexistent/words.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_file_is_error() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let result = WordList::load(file.path());
        assert!(matches!(result, Err(SnarkError::WordList(_))));
    }
}
