//! Error types for sift-recent

use std::path::PathBuf;

/// Failures that abort a whole recent-files query.
#[derive(Debug, thiserror::Error)]
pub enum RecentError {
    #[error("no recently-used bookmark file found (searched {} locations)", .searched.len())]
    StoreNotFound { searched: Vec<PathBuf> },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed bookmark file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
}
