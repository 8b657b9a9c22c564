use log::{debug, info, warn};

use crate::error::Result;
use crate::lemmatizer::{Lemmatizer, Lexicon};
use crate::model::{SentenceTrace, TokenSequence};
use crate::normalizer::ScriptNormalizer;
use crate::resolver::LemmaResolver;
use crate::sanitizer::CharacterSanitizer;
use crate::stopwords::StopWordSet;
use crate::tokenizer::Tokenizer;
use crate::types::{PipelineConfig, PipelineOptions};

/// Sentence-to-lemma pipeline.
///
/// All resources are loaded at construction and never mutated, so one
/// pipeline can be shared across threads.
#[derive(Debug, Clone)]
pub struct Pipeline {
    sanitizer: CharacterSanitizer,
    normalizer: ScriptNormalizer,
    tokenizer: Tokenizer,
    resolver: LemmaResolver,
    stopwords: StopWordSet,
}

impl Pipeline {
    /// Builds a pipeline from [`PipelineConfig::default`].
    pub fn init() -> Result<Self> {
        Self::from_config(PipelineConfig::default())
    }

    /// Loads every resource named by `config`, failing before any sentence
    /// is processed if one cannot be read.
    pub fn from_config(config: PipelineConfig) -> Result<Self> {
        let stopwords = match &config.resources.stopwords_path {
            Some(path) => StopWordSet::load(path)?,
            None => {
                info!("using bundled stop words");
                StopWordSet::bundled()
            }
        };
        let lexicon = Lexicon::load(
            config.resources.words_path.as_deref(),
            config.resources.verbs_path.as_deref(),
        )?;
        let resolver = LemmaResolver::new(
            config.manual_overrides,
            config.corrections,
            Lemmatizer::new(&lexicon),
        );
        Self::new(&config.options, resolver, stopwords)
    }

    /// Assembles a pipeline from already-loaded parts.
    pub fn new(
        options: &PipelineOptions,
        resolver: LemmaResolver,
        stopwords: StopWordSet,
    ) -> Result<Self> {
        Ok(Self {
            sanitizer: CharacterSanitizer::new(options)?,
            normalizer: ScriptNormalizer::new()?,
            tokenizer: Tokenizer::new(),
            resolver,
            stopwords,
        })
    }

    /// Runs every sentence in order and concatenates the surviving lemmas.
    pub fn process<I, S>(&self, sentences: I) -> TokenSequence
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = TokenSequence::new();
        let mut sentence_count = 0usize;
        for sentence in sentences {
            tokens.extend(self.process_sentence(sentence.as_ref()));
            sentence_count += 1;
        }

        if sentence_count == 0 {
            warn!("no sentences to process");
        } else if tokens.is_empty() {
            warn!("all tokens of {sentence_count} sentences were filtered out");
        } else {
            debug!("{} tokens from {sentence_count} sentences", tokens.len());
        }
        tokens
    }

    /// Surviving lemmas of one sentence.
    pub fn process_sentence(&self, sentence: &str) -> Vec<String> {
        self.trace(sentence).kept
    }

    /// Every intermediate stage of one sentence.
    pub fn trace(&self, sentence: &str) -> SentenceTrace {
        let sanitized = self.sanitizer.sanitize(sentence);
        let normalized = self.normalizer.normalize(&sanitized);
        let refined = self.normalizer.refine_characters(&normalized);
        let tokens: Vec<String> = self
            .tokenizer
            .tokenize(&refined)
            .into_iter()
            .map(str::to_string)
            .collect();
        let resolutions: Vec<_> = tokens
            .iter()
            .map(|token| self.resolver.resolve_detailed(token))
            .collect();

        let lemmas = resolutions.iter().filter_map(|resolution| {
            if resolution.lemma.is_empty() {
                debug!("dropping empty lemma in {sentence:?}");
                None
            } else {
                Some(resolution.lemma.clone())
            }
        });
        let kept = self.stopwords.filter(lemmas);

        SentenceTrace {
            input: sentence.to_string(),
            sanitized,
            normalized,
            refined,
            tokens,
            resolutions,
            kept,
        }
    }

    /// The loaded stop words.
    pub fn stopwords(&self) -> &StopWordSet {
        &self.stopwords
    }

    /// The lemma resolver.
    pub fn resolver(&self) -> &LemmaResolver {
        &self.resolver
    }
}
