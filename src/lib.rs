#![warn(missing_docs)]

//! Persian text normalization for word clouds.
//!
//! Raw sentences are sanitized, normalized, tokenized, lemmatized and
//! stripped of stop words; the surviving lemmas form a [`TokenSequence`]
//! that a renderer turns into an image.
//!
//! ## Quick Start
//! ```no_run
//! use persian_wordcloud::Pipeline;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::init()?;
//!     let tokens = pipeline.process(["کدوم یکی رو میخوای؟", "سلام، چطوری؟!"]);
//!     for (token, count) in tokens.frequencies() {
//!         println!("{token}\t{count}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Stages
//! 1. [`CharacterSanitizer`]: punctuation, foreign script, joiners, whitespace
//! 2. [`ScriptNormalizer`]: letterforms, digits, affix spacing
//! 3. [`Tokenizer`]: word boundaries
//! 4. [`LemmaResolver`]: manual overrides, [`Lemmatizer`], corrections
//! 5. [`StopWordSet`]: filtering
//!
//! Rendering is delegated through [`RenderAdapter`]; [`prepare_render_text`]
//! produces the shaped, visually ordered text it receives.
//!
//! ## Environment Variables
//! - `PERSIAN_WORDCLOUD_STOPWORDS_PATH`: stop-word file (one word per line).
//! - `PERSIAN_WORDCLOUD_WORDS_PATH`: lexicon word list.
//! - `PERSIAN_WORDCLOUD_VERBS_PATH`: lexicon verb list (`past#present`).
//! - `PERSIAN_WORDCLOUD_MASK_PATH`, `PERSIAN_WORDCLOUD_FONT_PATH`,
//!   `PERSIAN_WORDCLOUD_OUTPUT_PATH`: render settings.
//!
//! Without a configured stop-word file, `stopwords.dat` in the working
//! directory is used if present, else the bundled list.

mod constants;
mod discovery;
mod error;
mod lemmatizer;
mod model;
mod normalizer;
mod pipeline;
mod render;
mod reshape;
mod resolver;
mod sanitizer;
mod stopwords;
mod tokenizer;
mod types;

pub use constants::*;
pub use error::{Result, WordCloudError};
pub use lemmatizer::{conjugations, Lemmatizer, Lexicon, Stemmer, VerbStems};
pub use model::{Lemma, OverrideTable, Resolution, ResolutionPath, SentenceTrace, TokenSequence};
pub use normalizer::ScriptNormalizer;
pub use pipeline::Pipeline;
pub use render::{prepare_render_text, render_word_cloud, RenderAdapter, RenderRequest};
pub use reshape::{reshape, visual_order};
pub use resolver::LemmaResolver;
pub use sanitizer::CharacterSanitizer;
pub use stopwords::StopWordSet;
pub use tokenizer::Tokenizer;
pub use types::{PipelineConfig, PipelineOptions, RenderConfig, ResourceConfig};

#[cfg(test)]
mod test_support;
