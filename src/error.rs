use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a build before the script is written.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("prompt file not found: {}", path.display())]
    MissingInput { path: PathBuf },
    #[error("section '## {section}' not found in prompt")]
    MissingSection { section: &'static str },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("payload serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
