use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content export: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("{kind} not found: {slug}")]
    NotFound { kind: &'static str, slug: String },
}
