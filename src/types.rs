use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_COLOR_MAP, DEFAULT_FONT_PATH, DEFAULT_MASK_PATH,
    DEFAULT_OUTPUT_PATH, DEFAULT_PUNCTUATION, FONT_PATH_ENV, MASK_PATH_ENV, OUTPUT_PATH_ENV,
    STOPWORDS_PATH_ENV, VERBS_PATH_ENV, WORDS_PATH_ENV,
};
use crate::discovery::{discover_stopwords_path, env_path};
use crate::error::{Result, WordCloudError};
use crate::model::OverrideTable;

/// Per-run switches for the character-level stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Replace every run of characters outside the Arabic block with a space.
    pub ignore_foreign_script: bool,
    /// Punctuation marks collapsed before anything else.
    pub punctuation: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            ignore_foreign_script: true,
            punctuation: DEFAULT_PUNCTUATION.to_string(),
        }
    }
}

impl PipelineOptions {
    /// Toggles foreign-script suppression.
    pub fn with_ignore_foreign_script(mut self, ignore_foreign_script: bool) -> Self {
        self.ignore_foreign_script = ignore_foreign_script;
        self
    }

    /// Replaces the punctuation set.
    pub fn with_punctuation(mut self, punctuation: impl Into<String>) -> Self {
        self.punctuation = punctuation.into();
        self
    }

    pub(crate) fn validated_punctuation(&self) -> Result<&str> {
        if self.punctuation.is_empty() {
            return Err(WordCloudError::InvalidArgument(
                "PipelineOptions.punctuation must not be empty".to_string(),
            ));
        }
        Ok(&self.punctuation)
    }
}

/// Where the pipeline's external resources come from.
///
/// `None` selects the list bundled with the crate. A configured path that
/// cannot be read is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Stop-word file, one word per line.
    pub stopwords_path: Option<PathBuf>,
    /// Lexicon word list, one word per line.
    pub words_path: Option<PathBuf>,
    /// Lexicon verb list, one `past#present` entry per line.
    pub verbs_path: Option<PathBuf>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            stopwords_path: discover_stopwords_path(STOPWORDS_PATH_ENV),
            words_path: env_path(WORDS_PATH_ENV),
            verbs_path: env_path(VERBS_PATH_ENV),
        }
    }
}

impl ResourceConfig {
    /// Uses only the bundled resources, ignoring the environment.
    pub fn bundled() -> Self {
        Self {
            stopwords_path: None,
            words_path: None,
            verbs_path: None,
        }
    }

    /// Sets the stop-word file.
    pub fn with_stopwords_path(mut self, path: impl AsRef<Path>) -> Self {
        self.stopwords_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the lexicon word list.
    pub fn with_words_path(mut self, path: impl AsRef<Path>) -> Self {
        self.words_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the lexicon verb list.
    pub fn with_verbs_path(mut self, path: impl AsRef<Path>) -> Self {
        self.verbs_path = Some(path.as_ref().to_path_buf());
        self
    }
}

/// Everything needed to build a [`crate::Pipeline`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Character-level switches.
    pub options: PipelineOptions,
    /// Stop-word and lexicon sources.
    pub resources: ResourceConfig,
    /// Surface forms mapped before generic lemmatization.
    pub manual_overrides: OverrideTable,
    /// Lemmas corrected after generic lemmatization.
    pub corrections: OverrideTable,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            options: PipelineOptions::default(),
            resources: ResourceConfig::default(),
            manual_overrides: OverrideTable::manual_defaults(),
            corrections: OverrideTable::correction_defaults(),
        }
    }
}

impl PipelineConfig {
    /// Replaces the character-level switches.
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Shortcut for `options.ignore_foreign_script`.
    pub fn with_ignore_foreign_script(mut self, ignore_foreign_script: bool) -> Self {
        self.options.ignore_foreign_script = ignore_foreign_script;
        self
    }

    /// Replaces the resource sources.
    pub fn with_resources(mut self, resources: ResourceConfig) -> Self {
        self.resources = resources;
        self
    }

    /// Shortcut for `resources.stopwords_path`.
    pub fn with_stopwords_path(mut self, path: impl AsRef<Path>) -> Self {
        self.resources = self.resources.with_stopwords_path(path);
        self
    }

    /// Replaces the pre-lemmatization override table.
    pub fn with_manual_overrides(mut self, table: OverrideTable) -> Self {
        self.manual_overrides = table;
        self
    }

    /// Replaces the post-lemmatization correction table.
    pub fn with_corrections(mut self, table: OverrideTable) -> Self {
        self.corrections = table;
        self
    }
}

/// Settings handed through to the word-cloud renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Background color name.
    pub background_color: String,
    /// Color palette name.
    pub color_map: String,
    /// Image whose shape masks the layout.
    pub mask_path: PathBuf,
    /// Font able to draw the reshaped glyphs.
    pub font_path: PathBuf,
    /// Whether numeric tokens are drawn.
    pub include_numbers: bool,
    /// Whether the renderer normalizes text again; the pipeline already did.
    pub persian_normalize: bool,
    /// Where the raster image is written.
    pub output_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            color_map: DEFAULT_COLOR_MAP.to_string(),
            mask_path: env_path(MASK_PATH_ENV).unwrap_or_else(|| PathBuf::from(DEFAULT_MASK_PATH)),
            font_path: env_path(FONT_PATH_ENV).unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_PATH)),
            include_numbers: false,
            persian_normalize: false,
            output_path: env_path(OUTPUT_PATH_ENV)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        }
    }
}

impl RenderConfig {
    /// Sets the background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Sets the palette.
    pub fn with_color_map(mut self, color_map: impl Into<String>) -> Self {
        self.color_map = color_map.into();
        self
    }

    /// Sets the mask image.
    pub fn with_mask_path(mut self, path: impl AsRef<Path>) -> Self {
        self.mask_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the font.
    pub fn with_font_path(mut self, path: impl AsRef<Path>) -> Self {
        self.font_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets whether numbers are drawn.
    pub fn with_include_numbers(mut self, include_numbers: bool) -> Self {
        self.include_numbers = include_numbers;
        self
    }

    /// Sets whether the renderer normalizes again.
    pub fn with_persian_normalize(mut self, persian_normalize: bool) -> Self {
        self.persian_normalize = persian_normalize;
        self
    }

    /// Sets the output image path.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    /// Checks that the mask and font exist and the output path is usable.
    pub fn validate(&self) -> Result<()> {
        for resource in [&self.mask_path, &self.font_path] {
            if !resource.is_file() {
                return Err(WordCloudError::MissingResource(resource.clone()));
            }
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(WordCloudError::InvalidArgument(
                "RenderConfig.output_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
