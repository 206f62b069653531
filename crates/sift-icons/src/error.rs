//! Error types for sift-icons

use std::path::PathBuf;

/// Reasons a themed icon lookup can fail.
///
/// None of these reach the host: `resolve_icon` swaps them for the default icon.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("icon theme lookup is not available")]
    Unavailable,

    #[error("could not determine content type of {0}")]
    UnknownContentType(PathBuf),

    #[error("no themed icon for {content_type} (tried {names:?})")]
    NotFound {
        content_type: String,
        names: Vec<String>,
    },
}
