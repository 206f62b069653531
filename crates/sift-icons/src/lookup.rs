//! Icon lookup capability.
//!
//! A desktop may or may not have icon themes installed. The lookup is picked
//! once at startup (`detect`) and then handed to every query.

use crate::error::IconError;
use crate::icons::IconTheme;
use crate::paths::{get_icon_base_directories, get_icon_theme_order, get_pixmap_directories};
use log::info;
use std::path::{Path, PathBuf};

/// Content type reported for directories.
pub const DIRECTORY_CONTENT_TYPE: &str = "inode/directory";

/// Maps a filesystem path to a themed icon file.
pub trait IconLookup {
    /// Find a themed icon for `path` at roughly `size` pixels.
    fn lookup(&self, path: &Path, size: u32) -> Result<PathBuf, IconError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Lookup backed by the installed freedesktop icon themes.
#[derive(Debug)]
pub struct ThemeIconLookup {
    theme: IconTheme,
}

impl ThemeIconLookup {
    pub fn new(theme: IconTheme) -> Self {
        Self { theme }
    }

    /// Load the user's theme chain from the standard XDG locations.
    pub fn from_environment() -> Self {
        let base_dirs = get_icon_base_directories();
        let order = get_icon_theme_order(&base_dirs);
        Self::new(IconTheme::load(&base_dirs, &order, get_pixmap_directories()))
    }

    pub fn is_empty(&self) -> bool {
        self.theme.is_empty()
    }
}

impl IconLookup for ThemeIconLookup {
    fn lookup(&self, path: &Path, size: u32) -> Result<PathBuf, IconError> {
        let content_type =
            content_type(path).ok_or_else(|| IconError::UnknownContentType(path.to_path_buf()))?;
        let names = icon_names(&content_type);

        self.theme
            .resolve(&names, size)
            .ok_or(IconError::NotFound {
                content_type,
                names,
            })
    }

    fn name(&self) -> &'static str {
        "theme"
    }
}

/// Lookup used when no icon theme is available. Always fails.
#[derive(Debug, Default)]
pub struct NoThemeLookup;

impl IconLookup for NoThemeLookup {
    fn lookup(&self, _path: &Path, _size: u32) -> Result<PathBuf, IconError> {
        Err(IconError::Unavailable)
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Pick the lookup implementation for this session.
pub fn detect() -> Box<dyn IconLookup> {
    let lookup = ThemeIconLookup::from_environment();
    if lookup.is_empty() {
        info!("No icon theme installed; using default icons only");
        return Box::new(NoThemeLookup);
    }

    info!(
        "Using icon themes: {}",
        lookup.theme.theme_names().join(", ")
    );
    Box::new(lookup)
}

/// Content type of a path from its name alone. Directories are `inode/directory`.
pub fn content_type(path: &Path) -> Option<String> {
    if path.is_dir() {
        return Some(DIRECTORY_CONTENT_TYPE.to_string());
    }
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
}

/// Icon names for a content type, most specific first.
///
/// `image/png` -> `image-png`, `image-x-generic`; directories -> `folder`.
pub fn icon_names(content_type: &str) -> Vec<String> {
    if content_type == DIRECTORY_CONTENT_TYPE {
        return vec!["folder".to_string()];
    }

    let mut names = vec![content_type.replace('/', "-")];
    if let Some((top, _)) = content_type.split_once('/') {
        names.push(format!("{top}-x-generic"));
    }
    names
}
