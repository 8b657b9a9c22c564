use unicode_segmentation::UnicodeSegmentation;

/// Splits normalized text into word tokens on UAX #29 word boundaries.
///
/// ZWNJ is a word-internal extender there, so half-spaced compounds like
/// `کتاب‌ها` stay one token. Segments without letters or digits are dropped,
/// which guarantees no empty tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a tokenizer.
    pub fn new() -> Self {
        Self
    }

    /// Word tokens of `text` in order of appearance.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.unicode_words().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Tokenizer;

    #[test]
    fn splits_on_whitespace_in_order() {
        let tokens = Tokenizer::new().tokenize("کدوم یکی رو میخوای");
        assert_eq!(tokens, vec!["کدوم", "یکی", "رو", "میخوای"]);
    }

    #[test]
    fn keeps_half_spaced_words_together() {
        let tokens = Tokenizer::new().tokenize("می\u{200C}خوام کتاب\u{200C}ها");
        assert_eq!(tokens, vec!["می\u{200C}خوام", "کتاب\u{200C}ها"]);
    }

    #[test]
    fn never_yields_empty_tokens() {
        let tokens = Tokenizer::new().tokenize("  سلام   «خوبی»  ");
        assert_eq!(tokens, vec!["سلام", "خوبی"]);
        assert!(Tokenizer::new().tokenize("   ").is_empty());
        assert!(Tokenizer::new().tokenize("").is_empty());
    }
}
