use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_STOPWORDS_FILE;

pub(crate) fn default_stopwords_candidates() -> &'static [&'static str] {
    &[
        DEFAULT_STOPWORDS_FILE,
        "resources/stopwords.dat",
        "data/stopwords.dat",
    ]
}

/// Reads an explicit resource path from `key`, ignoring empty values.
pub(crate) fn env_path(key: &str) -> Option<PathBuf> {
    let value = env::var_os(key)?;
    if value.is_empty() {
        return None;
    }
    Some(PathBuf::from(value))
}

/// Resolves the stop-word file: env var first, then well-known relative
/// locations. `None` means the bundled list is used.
pub(crate) fn discover_stopwords_path(env_key: &str) -> Option<PathBuf> {
    if let Some(path) = env_path(env_key) {
        return Some(path);
    }

    let cwd = env::current_dir().ok()?;
    default_stopwords_candidates()
        .iter()
        .map(|candidate| cwd.join(candidate))
        .find(|path| path.is_file())
}
