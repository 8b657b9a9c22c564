//! Canonical Persian letterforms and spacing.
//!
//! [`ScriptNormalizer::refine_characters`] works on single characters and
//! whitespace runs. [`ScriptNormalizer::normalize`] refines first and then
//! rewrites affix spacing until nothing changes, so
//! `refine_characters(normalize(s))` is a fixpoint.

use regex::Regex;

use crate::error::Result;

const TATWEEL: char = '\u{0640}';

fn is_removable(c: char) -> bool {
    c == TATWEEL || c == '\r' || ('\u{064B}'..='\u{0652}').contains(&c)
}

fn canonical_char(c: char) -> char {
    match c {
        'ك' => 'ک',
        'ي' => 'ی',
        '%' => '٪',
        '0'..='9' => char::from_u32('۰' as u32 + (c as u32 - '0' as u32)).unwrap_or(c),
        '٠'..='٩' => char::from_u32('۰' as u32 + (c as u32 - '٠' as u32)).unwrap_or(c),
        _ => c,
    }
}

/// Deterministic, idempotent Persian text normalizer.
#[derive(Debug, Clone)]
pub struct ScriptNormalizer {
    ellipsis: Regex,
    spaces: Regex,
    newlines: Regex,
    affix_rules: Vec<(Regex, String)>,
}

impl ScriptNormalizer {
    /// Compiles the refinement and affix-spacing rules.
    pub fn new() -> Result<Self> {
        let affix_rules = [
            // ezafe after a final heh
            (r"([^ ]ه) ی ", "${1}\u{200C}ی "),
            // verbal prefixes
            (r"(^| )(ن?می) ", "${1}${2}\u{200C}"),
            // plural and comparative suffixes
            (
                r"([^\s\d]{2}) (ترین|تر|های|ها|گری|گر)(\s|$)",
                "${1}\u{200C}${2}${3}",
            ),
            // pronoun and copula suffixes after a final heh
            (
                r"([^ ]ه) (ایم|اید|اند|ام|اش|ای|ات)(\s|$)",
                "${1}\u{200C}${2}${3}",
            ),
        ]
        .into_iter()
        .map(|(pattern, replacement)| -> Result<(Regex, String)> {
            Ok((Regex::new(pattern)?, replacement.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ellipsis: Regex::new(r" ?\.\.\.")?,
            spaces: Regex::new(r" +")?,
            newlines: Regex::new(r"\n{3,}")?,
            affix_rules,
        })
    }

    /// Refines characters, then joins affixes to their stems with ZWNJ.
    pub fn normalize(&self, text: &str) -> String {
        let mut text = self.refine_characters(text);
        loop {
            let mut changed = false;
            for (pattern, replacement) in &self.affix_rules {
                let next = pattern
                    .replace_all(&text, replacement.as_str())
                    .into_owned();
                if next != text {
                    text = next;
                    changed = true;
                }
            }
            // each rewrite trades one space for a ZWNJ, so this terminates
            if !changed {
                return text;
            }
        }
    }

    /// Drops tatweel, diacritics and carriage returns, maps Arabic letters
    /// and digits to their Persian forms, and collapses spacing.
    pub fn refine_characters(&self, text: &str) -> String {
        let mapped: String = text
            .chars()
            .filter(|&c| !is_removable(c))
            .map(canonical_char)
            .collect();
        let text = self.ellipsis.replace_all(&mapped, " …");
        let text = self.spaces.replace_all(&text, " ");
        self.newlines.replace_all(&text, "\n\n").into_owned()
    }
}
