use log::trace;

use crate::lemmatizer::Lemmatizer;
use crate::model::{OverrideTable, Resolution, ResolutionPath};

/// Maps surface tokens to lemmas.
///
/// Resolution order, first match wins:
/// 1. `manual` table on the surface form (generic lemmatization skipped)
/// 2. generic lemmatization, annotation discarded
/// 3. `corrections` table on the step-2 root
///
/// A key present in both tables is only ever seen by `manual`.
#[derive(Debug, Clone)]
pub struct LemmaResolver {
    manual: OverrideTable,
    corrections: OverrideTable,
    lemmatizer: Lemmatizer,
}

impl LemmaResolver {
    /// Creates a resolver from injected tables.
    pub fn new(manual: OverrideTable, corrections: OverrideTable, lemmatizer: Lemmatizer) -> Self {
        Self {
            manual,
            corrections,
            lemmatizer,
        }
    }

    /// Lemma of `token`.
    pub fn resolve(&self, token: &str) -> String {
        self.resolve_detailed(token).lemma
    }

    /// Lemma of `token` together with the step that produced it.
    pub fn resolve_detailed(&self, token: &str) -> Resolution {
        if let Some(lemma) = self.manual.get(token) {
            trace!("{token} -> {lemma} (manual)");
            return Resolution {
                lemma: lemma.to_string(),
                path: ResolutionPath::ManualOverride,
            };
        }

        let root = self.lemmatizer.lemmatize(token).into_root();
        match self.corrections.get(&root) {
            Some(corrected) => {
                trace!("{token} -> {root} -> {corrected} (corrected)");
                Resolution {
                    lemma: corrected.to_string(),
                    path: ResolutionPath::Corrected,
                }
            }
            None => {
                trace!("{token} -> {root}");
                Resolution {
                    lemma: root,
                    path: ResolutionPath::Generic,
                }
            }
        }
    }

    /// The pre-lemmatization table.
    pub fn manual_overrides(&self) -> &OverrideTable {
        &self.manual
    }

    /// The post-lemmatization table.
    pub fn corrections(&self) -> &OverrideTable {
        &self.corrections
    }

    /// The generic lemmatizer.
    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }
}

impl Default for LemmaResolver {
    fn default() -> Self {
        Self::new(
            OverrideTable::manual_defaults(),
            OverrideTable::correction_defaults(),
            Lemmatizer::default(),
        )
    }
}
