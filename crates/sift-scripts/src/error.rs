//! Error types for sift-scripts

use std::path::PathBuf;

/// Script scan errors
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Scripts directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read scripts directory {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
