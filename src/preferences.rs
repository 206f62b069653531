//! User preferences.
//!
//! Read once per invocation. A changed file takes effect on the next call.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Hard cap on results handed to the launcher.
pub const MAX_RESULTS: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Keyword that routes a query to the recent-files extension.
    pub keyword_recent: String,
    /// Keyword that routes a query to the start-scripts extension.
    pub keyword_scripts: String,
    pub scripts_dir: PathBuf,
    /// Icon shown for scripts, placeholders and when no themed icon is found.
    pub default_icon: String,
    /// Requested themed icon size in pixels.
    pub icon_size: u32,
    /// Clamped to `1..=MAX_RESULTS`.
    pub max_results: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        let user = std::env::var("USER").unwrap_or_default();
        Self {
            keyword_recent: "rf".to_string(),
            keyword_scripts: "ss".to_string(),
            scripts_dir: PathBuf::from(format!("/etc/profiles/per-user/{user}/bin")),
            default_icon: "images/icon.svg".to_string(),
            icon_size: 32,
            max_results: MAX_RESULTS,
        }
    }
}

impl Preferences {
    /// Default location: `$XDG_CONFIG_HOME/sift/preferences.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sift").join("preferences.json"))
    }

    /// Load from a preferences file, or return defaults if missing or invalid.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring invalid preferences {}: {e}", path.display());
            Self::default()
        })
    }

    /// Number of results to present. At least one, so a query always shows something.
    pub fn result_limit(&self) -> usize {
        self.max_results.clamp(1, MAX_RESULTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("nope.json"));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{ "keyword_scripts": "go", "max_results": 500 }"#).unwrap();

        let prefs = Preferences::load(&path);
        assert_eq!(prefs.keyword_scripts, "go");
        assert_eq!(prefs.keyword_recent, "rf");
        assert_eq!(prefs.result_limit(), MAX_RESULTS);
    }

    #[test]
    fn test_zero_max_results_still_shows_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{ "max_results": 0 }"#).unwrap();

        let prefs = Preferences::load(&path);
        assert_eq!(prefs.max_results, 0);
        assert_eq!(prefs.result_limit(), 1);
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Preferences::load(&path), Preferences::default());
    }

    #[test]
    fn test_full_file_overrides_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(
            &path,
            r#"{
                "keyword_recent": "recent",
                "keyword_scripts": "go",
                "scripts_dir": "/opt/bin",
                "default_icon": "icon.png",
                "icon_size": 48,
                "max_results": 5
            }"#,
        )
        .unwrap();

        let prefs = Preferences::load(&path);
        assert_eq!(
            prefs,
            Preferences {
                keyword_recent: "recent".to_string(),
                keyword_scripts: "go".to_string(),
                scripts_dir: PathBuf::from("/opt/bin"),
                default_icon: "icon.png".to_string(),
                icon_size: 48,
                max_results: 5,
            }
        );
        assert_eq!(prefs.result_limit(), 5);
    }
}
