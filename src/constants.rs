//! Constants shared by the normalization pipeline and the render boundary.

/// Punctuation marks collapsed by the sanitizer (ASCII and Persian variants).
pub const DEFAULT_PUNCTUATION: &str = ",.;:?!،()؟";

/// First code point of the Arabic block the pipeline keeps.
pub const TARGET_SCRIPT_START: char = '\u{0600}';
/// Last code point of the Arabic block the pipeline keeps.
pub const TARGET_SCRIPT_END: char = '\u{06FF}';

/// Zero-width non-joiner, the Persian half-space.
pub const ZWNJ: char = '\u{200C}';

/// Separator between a verb's past and present stems in compound lemmas.
pub const LEMMA_SEPARATOR: char = '#';

/// Env var: explicit stop-word file path.
pub const STOPWORDS_PATH_ENV: &str = "PERSIAN_WORDCLOUD_STOPWORDS_PATH";
/// Env var: explicit lexicon word-list path.
pub const WORDS_PATH_ENV: &str = "PERSIAN_WORDCLOUD_WORDS_PATH";
/// Env var: explicit lexicon verb-list path.
pub const VERBS_PATH_ENV: &str = "PERSIAN_WORDCLOUD_VERBS_PATH";
/// Env var: mask image path handed to the renderer.
pub const MASK_PATH_ENV: &str = "PERSIAN_WORDCLOUD_MASK_PATH";
/// Env var: font path handed to the renderer.
pub const FONT_PATH_ENV: &str = "PERSIAN_WORDCLOUD_FONT_PATH";
/// Env var: output image path.
pub const OUTPUT_PATH_ENV: &str = "PERSIAN_WORDCLOUD_OUTPUT_PATH";

/// Stop-word file name looked up in the working directory.
pub const DEFAULT_STOPWORDS_FILE: &str = "stopwords.dat";
/// Default mask image.
pub const DEFAULT_MASK_PATH: &str = "mask.png";
/// Default font.
pub const DEFAULT_FONT_PATH: &str = "fonts/XTitre.TTF";
/// Default output image.
pub const DEFAULT_OUTPUT_PATH: &str = "word_cloud.png";
/// Default background color name.
pub const DEFAULT_BACKGROUND_COLOR: &str = "black";
/// Default color palette name.
pub const DEFAULT_COLOR_MAP: &str = "Blues_r";
