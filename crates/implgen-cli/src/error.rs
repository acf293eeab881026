use std::io;
use std::path::PathBuf;

use implgen_core::ModuleError;

/// Errors reported by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Load { path: PathBuf, source: ModuleError },

    #[error(transparent)]
    Generate(#[from] implgen_lib::Error),

    #[error("failed to write output: {0}")]
    Stdout(#[from] io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
