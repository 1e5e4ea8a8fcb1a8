use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Startup failures. Rejected words are not errors; see
/// [`Rejection`](crate::validator::Rejection).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no usable root word: fallback {0:?} must be a non-empty word of letters")]
    InvalidFallback(String),

    #[error("failed to read word list {path}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read dictionary {path}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
