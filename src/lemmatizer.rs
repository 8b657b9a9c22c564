//! Dictionary-backed Persian lemmatizer.
//!
//! A word is returned as is when the lexicon knows it, mapped to its verb
//! stems when it is a known conjugation, reduced to its stem when the stem
//! is a known word, and otherwise left unchanged.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::constants::LEMMA_SEPARATOR;
use crate::error::{Result, WordCloudError};
use crate::model::Lemma;

const BUNDLED_WORDS: &str = include_str!("../resources/words.dat");
const BUNDLED_VERBS: &str = include_str!("../resources/verbs.dat");

const STEM_SUFFIXES: [&str; 13] = [
    "ات", "ان", "ترین", "تر", "م", "ت", "ش", "یی", "ی", "ها", "\u{0654}", "\u{200C}ا", "\u{200C}",
];

const PAST_ENDINGS: [&str; 6] = ["م", "ی", "", "یم", "ید", "ند"];
const NARRATIVE_ENDINGS: [&str; 6] = [
    "ه\u{200C}ام",
    "ه\u{200C}ای",
    "ه",
    "ه\u{200C}ایم",
    "ه\u{200C}اید",
    "ه\u{200C}اند",
];
const PRESENT_ENDINGS: [&str; 6] = ["م", "ی", "د", "یم", "ید", "ند"];
const IMPERFECT_PREFIX: &str = "می\u{200C}";

/// Strips inflectional suffixes.
///
/// Suffixes are tried in a fixed order and stripping is cumulative, so
/// `کتاب‌ها` loses `ها` and then the half-space.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stemmer;

impl Stemmer {
    /// Stems `word`.
    pub fn stem(&self, word: &str) -> String {
        let mut stem = word;
        for suffix in STEM_SUFFIXES {
            if let Some(stripped) = stem.strip_suffix(suffix) {
                stem = stripped;
            }
        }
        match stem.strip_suffix('ۀ') {
            Some(stripped) => format!("{stripped}ه"),
            None => stem.to_string(),
        }
    }
}

/// A verb as its past and present stems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbStems {
    /// Past stem, e.g. `رفت`.
    pub past: String,
    /// Present stem, e.g. `رو`.
    pub present: String,
}

impl VerbStems {
    /// Parses `past#present`.
    pub fn parse(entry: &str) -> Option<Self> {
        let (past, present) = entry.split_once(LEMMA_SEPARATOR)?;
        Some(Self {
            past: past.to_string(),
            present: present.to_string(),
        })
    }

    /// The compound lemma every conjugation resolves to.
    pub fn lemma(&self) -> Lemma {
        Lemma::new(self.past.as_str()).with_annotation(self.present.as_str())
    }

    /// Every inflected surface form of this verb.
    pub fn conjugations(&self) -> Vec<String> {
        conjugations(&self.past, &self.present)
    }
}

fn with_negations(items: Vec<String>) -> Vec<String> {
    let negated: Vec<String> = items.iter().map(|item| format!("ن{item}")).collect();
    let mut all = items;
    all.extend(negated);
    all
}

fn attach(stem: &str, endings: &[&str]) -> Vec<String> {
    endings.iter().map(|ending| format!("{stem}{ending}")).collect()
}

fn prefixed(prefix: &str, items: &[String]) -> Vec<String> {
    items.iter().map(|item| format!("{prefix}{item}")).collect()
}

/// Conjugates a verb given its past and present stems.
pub fn conjugations(past: &str, present: &str) -> Vec<String> {
    if past.is_empty() {
        if present == "هست" {
            let mut forms = attach("هست", &PAST_ENDINGS);
            forms.extend(attach("نیست", &PAST_ENDINGS));
            return forms;
        }
        return Vec::new();
    }

    let past_simples = attach(past, &PAST_ENDINGS);
    let past_imperfects = prefixed(IMPERFECT_PREFIX, &past_simples);
    let past_narratives = attach(past, &NARRATIVE_ENDINGS);
    let imperatives = vec![format!("ب{present}"), format!("ن{present}")];

    let present = if present.ends_with('ا') || present == "آ" || present == "گو" {
        format!("{present}ی")
    } else {
        present.to_string()
    };
    let present_simples = attach(&present, &PRESENT_ENDINGS);
    let present_imperfects = prefixed(IMPERFECT_PREFIX, &present_simples);
    let present_subjunctives: Vec<String> = present_simples
        .iter()
        .map(|item| {
            if item.starts_with('ب') {
                item.clone()
            } else {
                format!("ب{item}")
            }
        })
        .collect();
    let present_negatives = prefixed("ن", &present_simples);

    let mut forms = with_negations(past_simples);
    forms.extend(with_negations(present_simples.clone()));
    forms.extend(with_negations(past_imperfects));
    forms.extend(with_negations(past_narratives));
    forms.extend(with_negations(present_simples));
    forms.extend(with_negations(present_imperfects));
    forms.extend(present_subjunctives);
    forms.extend(present_negatives);
    forms.extend(imperatives);

    if past.starts_with('آ') {
        forms = forms
            .into_iter()
            .map(|form| form.replace("بآ", "بیا").replace("نآ", "نیا"))
            .collect();
    }
    forms
}

/// Known words and verbs the lemmatizer resolves against.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
    verbs: Vec<VerbStems>,
}

impl Lexicon {
    /// The word and verb lists shipped with the crate.
    pub fn bundled() -> Self {
        Self {
            words: parse_lines(BUNDLED_WORDS).map(str::to_string).collect(),
            verbs: parse_lines(BUNDLED_VERBS)
                .filter_map(VerbStems::parse)
                .collect(),
        }
    }

    /// Loads either list from disk; `None` keeps the bundled list.
    pub fn load(words_path: Option<&Path>, verbs_path: Option<&Path>) -> Result<Self> {
        let mut lexicon = Self::bundled();
        if let Some(path) = words_path {
            lexicon.words = read_lines(path)?.into_iter().collect();
            debug!("loaded {} lexicon words from {}", lexicon.words.len(), path.display());
        }
        if let Some(path) = verbs_path {
            lexicon.verbs = read_lines(path)?
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    VerbStems::parse(entry).ok_or_else(|| {
                        WordCloudError::invalid_resource(
                            path,
                            index + 1,
                            format!("expected past{LEMMA_SEPARATOR}present, got {entry:?}"),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            debug!("loaded {} verbs from {}", lexicon.verbs.len(), path.display());
        }
        Ok(lexicon)
    }

    /// Adds words.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Adds a verb.
    pub fn with_verb(mut self, past: impl Into<String>, present: impl Into<String>) -> Self {
        self.verbs.push(VerbStems {
            past: past.into(),
            present: present.into(),
        });
        self
    }

    /// Whether `word` is a known word.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of known words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Known verbs in load order.
    pub fn verbs(&self) -> &[VerbStems] {
        &self.verbs
    }
}

fn parse_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|error| WordCloudError::resource_load(path, error))?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|error| WordCloudError::resource_load(path, error))?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Generic lemmatizer backed by a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    words: HashSet<String>,
    verbs: HashMap<String, Lemma>,
    stemmer: Stemmer,
}

impl Lemmatizer {
    /// Indexes every conjugation of every verb. When two verbs share a
    /// form the later one wins.
    pub fn new(lexicon: &Lexicon) -> Self {
        let mut verbs = HashMap::new();
        verbs.insert("است".to_string(), Lemma::new("").with_annotation("است"));
        for verb in &lexicon.verbs {
            let lemma = verb.lemma();
            for form in verb.conjugations() {
                verbs.insert(form, lemma.clone());
            }
        }
        Self {
            words: lexicon.words.clone(),
            verbs,
            stemmer: Stemmer,
        }
    }

    /// Lemmatizes one token.
    pub fn lemmatize(&self, word: &str) -> Lemma {
        if self.words.contains(word) {
            return Lemma::new(word);
        }
        if let Some(lemma) = self.verbs.get(word) {
            return lemma.clone();
        }
        let stem = self.stemmer.stem(word);
        if !stem.is_empty() && self.words.contains(&stem) {
            return Lemma::new(stem);
        }
        Lemma::new(word)
    }

    /// Number of indexed verb forms.
    pub fn verb_form_count(&self) -> usize {
        self.verbs.len()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new(&Lexicon::bundled())
    }
}

#[cfg(test)]
mod tests {
    use super::{conjugations, Lemmatizer, Lexicon, Stemmer, VerbStems};
    use crate::error::WordCloudError;
    use crate::model::Lemma;
    use crate::test_support::temp_resource;

    #[test]
    fn stemmer_strips_suffixes_cumulatively() {
        let stemmer = Stemmer;
        assert_eq!(stemmer.stem("کتاب\u{200C}ها"), "کتاب");
        assert_eq!(stemmer.stem("کتابها"), "کتاب");
        assert_eq!(stemmer.stem("میگم"), "میگ");
        assert_eq!(stemmer.stem("خیلیی"), "خیل");
        assert_eq!(stemmer.stem("خانۀ"), "خانه");
    }

    #[test]
    fn conjugations_cover_common_tenses() {
        let forms = conjugations("رفت", "رو");
        for expected in ["رفتم", "نرفتیم", "می\u{200C}رفتند", "رفته\u{200C}ام", "می\u{200C}روم", "بروید", "نرو"] {
            assert!(forms.iter().any(|form| form == expected), "missing {expected}");
        }
    }

    #[test]
    fn alef_madda_verbs_are_refined() {
        let forms = conjugations("آمد", "آ");
        assert!(forms.iter().any(|form| form == "بیایم"));
        assert!(forms.iter().any(|form| form == "نیامدم"));
        assert!(!forms.iter().any(|form| form.contains("بآ")));
    }

    #[test]
    fn copula_special_case() {
        let forms = conjugations("", "هست");
        assert!(forms.iter().any(|form| form == "هستم"));
        assert!(forms.iter().any(|form| form == "نیستند"));
        assert!(conjugations("", "باش").is_empty());
    }

    #[test]
    fn known_words_are_returned_unchanged() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("یکی"), Lemma::new("یکی"));
        assert_eq!(lemmatizer.lemmatize("کتاب"), Lemma::new("کتاب"));
    }

    #[test]
    fn verb_forms_carry_both_stems() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(
            lemmatizer.lemmatize("رفتم"),
            Lemma::new("رفت").with_annotation("رو")
        );
        assert_eq!(
            lemmatizer.lemmatize("می\u{200C}گویم"),
            Lemma::new("گفت").with_annotation("گو")
        );
        assert_eq!(lemmatizer.lemmatize("است").to_string(), "#است");
    }

    #[test]
    fn stems_are_used_only_when_known() {
        let lemmatizer = Lemmatizer::default();
        assert_eq!(lemmatizer.lemmatize("کتاب\u{200C}ها"), Lemma::new("کتاب"));
        assert_eq!(lemmatizer.lemmatize("میگم"), Lemma::new("میگ"));
        assert_eq!(lemmatizer.lemmatize("خیلیی"), Lemma::new("خیلیی"));
        assert_eq!(lemmatizer.lemmatize("میخوای"), Lemma::new("میخوای"));
    }

    #[test]
    fn lexicon_builders_extend_the_bundle() {
        let bundled = Lexicon::bundled();
        let lexicon = bundled
            .clone()
            .with_words(["درخت"])
            .with_verb("کاشت", "کار");
        let lemmatizer = Lemmatizer::new(&lexicon);
        assert!(lexicon.contains_word("درخت"));
        assert!(lexicon.contains_word("کتاب"));
        assert_eq!(lexicon.word_count(), bundled.word_count() + 1);
        assert_eq!(lexicon.verbs().len(), bundled.verbs().len() + 1);
        assert_eq!(lemmatizer.lemmatize("کتاب\u{200C}ها"), Lemma::new("کتاب"));
        assert_eq!(lemmatizer.lemmatize("درخت\u{200C}ها"), Lemma::new("درخت"));
        assert_eq!(lemmatizer.lemmatize("می\u{200C}کارم").root, "کاشت");
        assert!(lemmatizer.verb_form_count() > 1);
    }

    #[test]
    fn lexicon_loads_from_files() {
        let words = temp_resource("words.dat", "درخت\n\n  باغ \n");
        let verbs = temp_resource("verbs.dat", "کاشت#کار\n");
        let lexicon = Lexicon::load(Some(words.as_path()), Some(verbs.as_path())).expect("load lexicon");
        assert_eq!(lexicon.word_count(), 2);
        assert!(lexicon.contains_word("باغ"));
        assert_eq!(
            lexicon.verbs(),
            &[VerbStems::parse("کاشت#کار").expect("verb")]
        );
    }

    #[test]
    fn malformed_verb_lines_are_rejected() {
        let verbs = temp_resource("verbs.dat", "کاشت#کار\nبدون\n");
        let error = Lexicon::load(None, Some(verbs.as_path())).expect_err("invalid verb line");
        assert!(matches!(error, WordCloudError::InvalidResource { line: 2, .. }));
    }

    #[test]
    fn missing_lexicon_file_is_fatal() {
        let error = Lexicon::load(Some(std::path::Path::new("/nonexistent/words.dat")), None)
            .expect_err("missing file");
        assert!(matches!(error, WordCloudError::ResourceLoad { .. }));
    }
}
