use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("options have already been published")]
    AlreadyPublished,
}
