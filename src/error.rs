use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning the command line into a [`crate::resolve::ResolvedConfig`].
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Missing either wasm file path or function name.")]
    Usage,

    #[error("{path} does not exist!")]
    PathNotFound { path: String },

    #[error("failed to prepare binding cache directory {}: {source}", path.display())]
    BindingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read the current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("no user account found for uid {uid}")]
    UnknownUser { uid: u32 },

    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl ResolveError {
    pub fn is_usage(&self) -> bool {
        matches!(self, ResolveError::Usage)
    }
}
