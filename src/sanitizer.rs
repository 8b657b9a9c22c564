//! Character-level cleanup applied to every raw sentence.
//!
//! The passes run in a fixed order and each one assumes the previous ones
//! already collapsed their character class:
//!
//! 1. punctuation runs → one space
//! 2. runs outside the Arabic block → one space (when enabled)
//! 3. whitespace runs mixed with ZWNJ → one space
//! 4. remaining ZWNJ runs → one space
//! 5. newline runs, then tab runs → one space

use regex::Regex;

use crate::constants::{TARGET_SCRIPT_END, TARGET_SCRIPT_START, ZWNJ};
use crate::error::Result;
use crate::types::PipelineOptions;

/// Strips punctuation, foreign characters and joiners from raw text.
#[derive(Debug, Clone)]
pub struct CharacterSanitizer {
    punctuation: Regex,
    foreign_script: Option<Regex>,
    spaced_joiners: Regex,
    joiners: Regex,
    newlines: Regex,
    tabs: Regex,
}

impl CharacterSanitizer {
    /// Compiles the passes for `options`.
    pub fn new(options: &PipelineOptions) -> Result<Self> {
        let class: String = options
            .validated_punctuation()?
            .chars()
            .map(|mark| regex::escape(mark.encode_utf8(&mut [0; 4])))
            .collect();
        let foreign_script = if options.ignore_foreign_script {
            Some(Regex::new(&format!(
                r"[^\x{{{:04X}}}-\x{{{:04X}}}]+",
                TARGET_SCRIPT_START as u32, TARGET_SCRIPT_END as u32
            ))?)
        } else {
            None
        };
        let zwnj = format!(r"\x{{{:04X}}}", ZWNJ as u32);

        Ok(Self {
            punctuation: Regex::new(&format!("[{class}]+"))?,
            foreign_script,
            spaced_joiners: Regex::new(&format!(r"[{zwnj}\s]*\s[\s{zwnj}]*"))?,
            joiners: Regex::new(&format!("[{zwnj}]+"))?,
            newlines: Regex::new(r"\n+")?,
            tabs: Regex::new(r"\t+")?,
        })
    }

    /// Runs all passes over `sentence`.
    pub fn sanitize(&self, sentence: &str) -> String {
        let mut text = self.punctuation.replace_all(sentence, " ").into_owned();
        if let Some(foreign_script) = &self.foreign_script {
            text = foreign_script.replace_all(&text, " ").into_owned();
        }
        for pass in [&self.spaced_joiners, &self.joiners, &self.newlines, &self.tabs] {
            text = pass.replace_all(&text, " ").into_owned();
        }
        text
    }

    /// Whether foreign-script suppression is active.
    pub fn ignores_foreign_script(&self) -> bool {
        self.foreign_script.is_some()
    }
}
