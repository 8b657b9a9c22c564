use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::{Result, WordCloudError};

const BUNDLED_STOPWORDS: &str = include_str!("../resources/stopwords.dat");

/// Words excluded from the final token sequence.
///
/// Loaded once, trimmed per line, then shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// The list shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_words(BUNDLED_STOPWORDS.lines())
    }

    /// Builds a set from words; surrounding whitespace is trimmed and blank
    /// entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_string())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Loads one stop word per line. A missing or unreadable file is fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| WordCloudError::resource_load(path, error))?;
        let set = Self::from_reader(BufReader::new(file), path)?;
        info!("loaded {} stop words from {}", set.len(), path.display());
        Ok(set)
    }

    /// Reads one stop word per line from `reader`; `origin` is used in errors.
    pub fn from_reader(reader: impl BufRead, origin: impl AsRef<Path>) -> Result<Self> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|error| WordCloudError::resource_load(origin.as_ref(), error))?;
        Ok(Self::from_words(lines))
    }

    /// Whether `token` is a stop word.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Drops stop words, keeping order.
    pub fn filter<I, S>(&self, tokens: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter(|token| !self.is_stop_word(token.as_ref()))
            .collect()
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::StopWordSet;
    use crate::error::WordCloudError;
    use crate::test_support::temp_resource;

    #[test]
    fn lines_are_trimmed_and_deduplicated() {
        let set = StopWordSet::from_reader("  رو \nو\nرو\n\n\tاز\t\n".as_bytes(), "inline")
            .expect("parse");
        assert_eq!(set.len(), 3);
        assert!(set.is_stop_word("رو"));
        assert!(set.is_stop_word("از"));
        assert!(!set.is_stop_word(""));
    }

    #[test]
    fn filter_keeps_order() {
        let set = StopWordSet::from_words(["رو", "و"]);
        let kept = set.filter(vec!["کدوم", "رو", "یکی", "و", "میخوای"]);
        assert_eq!(kept, vec!["کدوم", "یکی", "میخوای"]);
    }

    #[test]
    fn load_reads_file() {
        let path = temp_resource("stopwords.dat", "از\nبه\n");
        let set = StopWordSet::load(&path).expect("load");
        assert_eq!(set, StopWordSet::from_words(["از", "به"]));
    }

    #[test]
    fn missing_file_is_fatal() {
        let error = StopWordSet::load("/nonexistent/stopwords.dat").expect_err("missing");
        assert!(matches!(error, WordCloudError::ResourceLoad { .. }));
    }

    #[test]
    fn bundled_list_is_not_empty() {
        let set = StopWordSet::bundled();
        assert!(!set.is_empty());
        assert!(set.is_stop_word("و"));
        assert!(set.is_stop_word("رو"));
    }
}
