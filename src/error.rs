use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type returned by persian-wordcloud public APIs.
#[derive(Debug, Error)]
pub enum WordCloudError {
    /// A stop-word, lexicon or override file could not be read.
    #[error("failed to load resource {}: {source}", .path.display())]
    ResourceLoad {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A render resource (mask, font) does not exist.
    #[error("missing resource: {}", .0.display())]
    MissingResource(PathBuf),
    /// A resource line could not be parsed.
    #[error("invalid resource {}:{line}: {message}", .path.display())]
    InvalidResource {
        /// Resource the line came from.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
    /// User-provided arguments were invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A sanitizer or normalizer pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// Reported by a render adapter.
    #[error("render error: {0}")]
    Render(String),
}

impl WordCloudError {
    pub(crate) fn resource_load(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WordCloudError::ResourceLoad {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_resource(
        path: impl Into<PathBuf>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        WordCloudError::InvalidResource {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WordCloudError>;

#[cfg(test)]
mod error_tests {
    use super::WordCloudError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(
            WordCloudError::MissingResource(PathBuf::from("mask.png")).to_string(),
            "missing resource: mask.png"
        );
        assert_eq!(
            WordCloudError::InvalidArgument("bad arg".to_string()).to_string(),
            "invalid argument: bad arg"
        );
        assert_eq!(
            WordCloudError::invalid_resource("verbs.dat", 3, "missing separator").to_string(),
            "invalid resource verbs.dat:3: missing separator"
        );
        assert_eq!(
            WordCloudError::Render("no font".to_string()).to_string(),
            "render error: no font"
        );
    }

    #[test]
    fn resource_load_keeps_path_and_source() {
        let error = WordCloudError::resource_load(
            "stopwords.dat",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(
            error.to_string(),
            "failed to load resource stopwords.dat: gone"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn regex_error_converts_to_pattern() {
        let regex_error = regex::Regex::new("[").expect_err("expected invalid pattern");
        let error: WordCloudError = regex_error.into();
        assert!(matches!(error, WordCloudError::Pattern(_)));
        assert!(error.to_string().starts_with("invalid pattern:"));
    }
}
