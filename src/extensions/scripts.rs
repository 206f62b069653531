//! Start-scripts extension.

use super::{Action, Extension, ResultItem};
use crate::preferences::Preferences;
use log::{error, info};
use sift_scripts::{ScriptError, scan_scripts};

pub const DIRECTORY_NOT_FOUND: &str = "Scripts directory not found";
pub const UNREADABLE: &str = "Could not read scripts directory";
pub const NO_MATCHES: &str = "No matching scripts found";

pub struct StartScripts<'a> {
    prefs: &'a Preferences,
}

impl<'a> StartScripts<'a> {
    pub fn new(prefs: &'a Preferences) -> Self {
        Self { prefs }
    }
}

impl Extension for StartScripts<'_> {
    fn keyword(&self) -> &str {
        &self.prefs.keyword_scripts
    }

    fn handle_query(&self, query: &str) -> Vec<ResultItem> {
        let icon = &self.prefs.default_icon;

        let scripts = match scan_scripts(&self.prefs.scripts_dir, query.trim()) {
            Ok(scripts) => scripts,
            Err(e @ ScriptError::DirectoryNotFound(_)) => {
                error!("{e}");
                return vec![ResultItem::placeholder(DIRECTORY_NOT_FOUND, icon)];
            }
            Err(e @ ScriptError::Read { .. }) => {
                error!("{e}");
                return vec![ResultItem::placeholder(UNREADABLE, icon)];
            }
        };

        if scripts.is_empty() {
            return vec![ResultItem::placeholder(NO_MATCHES, icon)];
        }

        info!("{} scripts match {query:?}", scripts.len());

        scripts
            .into_iter()
            .take(self.prefs.result_limit())
            .map(|script| ResultItem {
                name: script.name,
                description: Some(script.path.display().to_string()),
                icon: icon.clone(),
                on_enter: Some(Action::RunScript { path: script.path }),
            })
            .collect()
    }
}
