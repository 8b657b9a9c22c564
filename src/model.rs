use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::LEMMA_SEPARATOR;
use crate::error::{Result, WordCloudError};

/// Output of the generic lemmatizer.
///
/// Verbs come back as a past stem plus the present stem as annotation,
/// written `past#present` in compound form. Only `root` survives
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lemma {
    /// Canonical root.
    pub root: String,
    /// Secondary stem or other annotation.
    pub annotation: Option<String>,
}

impl Lemma {
    /// Creates a lemma without annotation.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            annotation: None,
        }
    }

    /// Attaches an annotation.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Splits a compound lemma at the first separator.
    pub fn parse(compound: &str) -> Self {
        match compound.split_once(LEMMA_SEPARATOR) {
            Some((root, annotation)) => Self::new(root).with_annotation(annotation),
            None => Self::new(compound),
        }
    }

    /// Drops the annotation.
    pub fn into_root(self) -> String {
        self.root
    }
}

impl fmt::Display for Lemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.annotation {
            Some(annotation) => write!(f, "{}{}{}", self.root, LEMMA_SEPARATOR, annotation),
            None => f.write_str(&self.root),
        }
    }
}

/// Immutable string-to-string correction map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    /// Builds a table from `(key, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Colloquial spellings the generic lemmatizer cannot root.
    pub fn manual_defaults() -> Self {
        Self::from_pairs([
            ("کدوم", "کدوم"),
            ("کدوممون", "کدوم"),
            ("کدومشون", "کدوم"),
            ("کدومم", "کدوم"),
            ("کدومو", "کدوم"),
            ("هیچ\u{200C}کدوم", "هیچ\u{200C}کدوم"),
            ("نیس", "نیست"),
            ("باباا", "بابا"),
            ("خیلیی", "خیلی"),
            ("خیلییی", "خیلی"),
        ])
    }

    /// Known mis-lemmatized roots.
    pub fn correction_defaults() -> Self {
        Self::from_pairs([("میگ", "میگه")])
    }

    /// Loads a tab-separated `key<TAB>value` file; blank lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| WordCloudError::resource_load(path, error))?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parses tab-separated pairs from `reader`; `origin` is used in errors.
    pub fn from_reader(reader: impl BufRead, origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let mut entries = HashMap::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|error| WordCloudError::resource_load(origin, error))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (key, value) = line.split_once('\t').ok_or_else(|| {
                WordCloudError::invalid_resource(origin, index + 1, "expected key<TAB>value")
            })?;
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(Self { entries })
    }

    /// Looks up a replacement.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` has a replacement.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Which resolution step produced a token's lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    /// Hit in the pre-lemmatization table; generic lemmatization skipped.
    ManualOverride,
    /// Generic lemmatization, result used as is.
    Generic,
    /// Generic lemmatization, then replaced by the correction table.
    Corrected,
}

/// A resolved token and the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Final lemma.
    pub lemma: String,
    /// Step that produced it.
    pub path: ResolutionPath,
}

/// Ordered tokens accumulated across all sentences of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one token.
    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Tokens in input order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether nothing survived.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates tokens in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Tokens joined by single spaces, the renderer's input text.
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }

    /// Token counts, most frequent first; ties keep first-seen order.
    pub fn frequencies(&self) -> Vec<(String, usize)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();
        for token in &self.tokens {
            match index.get(token.as_str()) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(token.as_str(), counts.len());
                    counts.push((token.clone(), 1));
                }
            }
        }
        // stable sort keeps first-seen order among equal counts
        counts.sort_by(|left, right| right.1.cmp(&left.1));
        counts
    }

    /// Consumes the sequence.
    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl Extend<String> for TokenSequence {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.tokens.extend(iter);
    }
}

impl IntoIterator for TokenSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Every intermediate stage of one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceTrace {
    /// Raw input.
    pub input: String,
    /// After character sanitization.
    pub sanitized: String,
    /// After script normalization.
    pub normalized: String,
    /// After character refinement.
    pub refined: String,
    /// Surface tokens.
    pub tokens: Vec<String>,
    /// One resolution per surface token.
    pub resolutions: Vec<Resolution>,
    /// Lemmas that survived stop-word filtering.
    pub kept: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{Lemma, OverrideTable, TokenSequence};
    use crate::error::WordCloudError;

    #[test]
    fn lemma_parse_splits_at_first_separator() {
        let lemma = Lemma::parse("رفت#رو");
        assert_eq!(lemma.root, "رفت");
        assert_eq!(lemma.annotation.as_deref(), Some("رو"));

        let nested = Lemma::parse("a#b#c");
        assert_eq!(nested.root, "a");
        assert_eq!(nested.annotation.as_deref(), Some("b#c"));

        let plain = Lemma::parse("کتاب");
        assert_eq!(plain, Lemma::new("کتاب"));
    }

    #[test]
    fn lemma_display_restores_compound_form() {
        assert_eq!(Lemma::new("گفت").with_annotation("گو").to_string(), "گفت#گو");
        assert_eq!(Lemma::new("کتاب").to_string(), "کتاب");
        assert_eq!(Lemma::parse("#است").into_root(), "");
    }

    #[test]
    fn manual_defaults_map_colloquial_forms() {
        let table = OverrideTable::manual_defaults();
        assert_eq!(table.len(), 10);
        assert_eq!(table.get("کدومشون"), Some("کدوم"));
        assert_eq!(table.get("خیلییی"), Some("خیلی"));
        assert_eq!(table.get("نیس"), Some("نیست"));
        assert!(table.get("کتاب").is_none());
    }

    #[test]
    fn override_table_parses_tab_separated_lines() {
        let data = "میگ\tمیگه\n\n  نیس\tنیست  \n";
        let table = OverrideTable::from_reader(data.as_bytes(), "inline").expect("parse");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("نیس"), Some("نیست"));
    }

    #[test]
    fn override_table_rejects_lines_without_tab() {
        let error = OverrideTable::from_reader("a\tb\nbroken\n".as_bytes(), "inline")
            .expect_err("expected invalid line");
        assert!(matches!(
            error,
            WordCloudError::InvalidResource { line: 2, .. }
        ));
    }

    #[test]
    fn override_table_load_reports_missing_file() {
        let error = OverrideTable::load("/nonexistent/overrides.tsv").expect_err("missing");
        assert!(matches!(error, WordCloudError::ResourceLoad { .. }));
    }

    #[test]
    fn frequencies_sort_by_count_then_first_seen() {
        let tokens = TokenSequence::from(
            ["ب", "الف", "ب", "ج", "الف", "ب"]
                .iter()
                .map(|token| token.to_string())
                .collect::<Vec<_>>(),
        );
        assert_eq!(
            tokens.frequencies(),
            vec![
                ("ب".to_string(), 3),
                ("الف".to_string(), 2),
                ("ج".to_string(), 1)
            ]
        );
        assert_eq!(tokens.join(), "ب الف ب ج الف ب");
    }

    #[test]
    fn empty_sequence_joins_to_empty_string() {
        let tokens = TokenSequence::new();
        assert!(tokens.is_empty());
        assert_eq!(tokens.join(), "");
        assert!(tokens.frequencies().is_empty());
    }
}
