//! Launcher extensions.
//!
//! The launcher calls `handle_query` once per keystroke with the keyword and
//! whatever the user typed after it. Every call returns at least one item.
//!
//! - `recent` - recently used files from the desktop XBEL store
//! - `scripts` - executable `start-*` scripts

pub mod recent;
pub mod scripts;

use crate::preferences::Preferences;
use serde::Serialize;
use sift_icons::IconLookup;
use std::path::PathBuf;

/// What happens when the user picks a result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Open with the default handler for the file type.
    Open { path: PathBuf },
    /// Execute the file as a script.
    RunScript { path: PathBuf },
}

/// One row in the launcher's result list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub icon: String,
    /// `None` for placeholders, which do nothing when picked.
    pub on_enter: Option<Action>,
}

impl ResultItem {
    /// An inert item that explains why there are no real results.
    pub fn placeholder(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            icon: icon.to_string(),
            on_enter: None,
        }
    }
}

/// A query handler bound to one keyword.
pub trait Extension {
    /// Keyword that routes queries here.
    fn keyword(&self) -> &str;

    /// Build the result list for the text typed after the keyword.
    /// Never empty and never longer than the configured limit.
    fn handle_query(&self, query: &str) -> Vec<ResultItem>;
}

/// Route a query to the extension registered for `keyword`.
pub fn handle_query(
    keyword: &str,
    query: &str,
    prefs: &Preferences,
    icons: &dyn IconLookup,
) -> Vec<ResultItem> {
    let recent = recent::RecentFiles::new(prefs, icons, dirs::home_dir());
    let scripts = scripts::StartScripts::new(prefs);
    let extensions: [&dyn Extension; 2] = [&recent, &scripts];

    match extensions.iter().find(|ext| ext.keyword() == keyword) {
        Some(ext) => ext.handle_query(query),
        None => {
            log::warn!("No extension registered for keyword {keyword:?}");
            vec![ResultItem::placeholder("Unknown keyword", &prefs.default_icon)]
        }
    }
}
