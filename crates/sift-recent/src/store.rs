//! Locating the recently-used bookmark file.

use crate::error::RecentError;
use log::debug;
use std::path::{Path, PathBuf};

/// Bookmark file locations relative to the home directory, highest priority first.
pub const STORE_CANDIDATES: [&str; 4] = [
    ".local/share/recently-used.xbel",
    ".gnome2/recently-used.xbel",
    ".kde/share/apps/RecentDocuments/recently-used.xbel",
    ".xfce4/recently-used.xbel",
];

/// Candidate paths expanded against `home`, in priority order.
pub fn candidate_paths(home: &Path) -> Vec<PathBuf> {
    STORE_CANDIDATES.iter().map(|rel| home.join(rel)).collect()
}

/// Return the first candidate bookmark file that exists.
pub fn locate_store(home: &Path) -> Result<PathBuf, RecentError> {
    let searched = candidate_paths(home);

    match searched.iter().find(|path| path.exists()) {
        Some(found) => {
            debug!("Using bookmark store {}", found.display());
            Ok(found.clone())
        }
        None => Err(RecentError::StoreNotFound { searched }),
    }
}
