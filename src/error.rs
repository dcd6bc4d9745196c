use std::path::PathBuf;
use thiserror::Error;

/// Failures loading the word list. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary {path} contains no words")]
    Empty { path: PathBuf },
}
