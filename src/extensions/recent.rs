//! Recent-files extension.
//!
//! Query syntax: an optional category code (`f`, `d`, `i`, `v`, `a`) followed
//! by a name filter, e.g. `i holiday` or just `report`.

use super::{Action, Extension, ResultItem};
use crate::preferences::Preferences;
use log::error;
use sift_icons::IconLookup;
use sift_recent::{IconOptions, RecentError, search_recent};
use std::path::PathBuf;

pub const STORE_NOT_FOUND: &str = "Recent files store not found";
pub const UNREADABLE: &str = "Could not read recent files";
pub const NO_MATCHES: &str = "No matching recent files";

pub struct RecentFiles<'a> {
    prefs: &'a Preferences,
    icons: &'a dyn IconLookup,
    home: Option<PathBuf>,
}

impl<'a> RecentFiles<'a> {
    pub fn new(prefs: &'a Preferences, icons: &'a dyn IconLookup, home: Option<PathBuf>) -> Self {
        Self { prefs, icons, home }
    }
}

impl Extension for RecentFiles<'_> {
    fn keyword(&self) -> &str {
        &self.prefs.keyword_recent
    }

    fn handle_query(&self, query: &str) -> Vec<ResultItem> {
        let default_icon = &self.prefs.default_icon;

        let Some(home) = &self.home else {
            error!("Home directory is unknown");
            return vec![ResultItem::placeholder(STORE_NOT_FOUND, default_icon)];
        };

        let options = IconOptions {
            lookup: self.icons,
            size: self.prefs.icon_size,
            default_icon,
        };

        let results = match search_recent(query, home, &options) {
            Ok(results) => results,
            Err(e) => {
                error!("{e}");
                let message = match e {
                    RecentError::StoreNotFound { .. } => STORE_NOT_FOUND,
                    RecentError::Read { .. } | RecentError::Parse { .. } => UNREADABLE,
                };
                return vec![ResultItem::placeholder(message, default_icon)];
            }
        };

        if results.is_empty() {
            return vec![ResultItem::placeholder(NO_MATCHES, default_icon)];
        }

        results
            .into_iter()
            .take(self.prefs.result_limit())
            .map(|result| ResultItem {
                name: result.display_name,
                description: Some(result.path.display().to_string()),
                icon: result.icon.to_string(),
                on_enter: Some(Action::Open { path: result.path }),
            })
            .collect()
    }
}
