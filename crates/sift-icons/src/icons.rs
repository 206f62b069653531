//! Icon theme handling.

use crate::paths::{ThemeDirectory, parse_icon_theme_index};
use log::debug;
use std::path::{Path, PathBuf};

const ICON_EXTENSIONS: [&str; 3] = ["png", "svg", "xpm"];

/// One installed copy of a theme under a base directory.
#[derive(Debug)]
struct ThemeRoot {
    path: PathBuf,
    directories: Vec<ThemeDirectory>,
}

/// A named theme, possibly installed under several base directories.
#[derive(Debug)]
struct Theme {
    name: String,
    roots: Vec<ThemeRoot>,
}

/// Handles icon lookups across multiple themes and directories.
///
/// Lookups probe the filesystem directly; nothing is indexed or cached.
#[derive(Debug)]
pub struct IconTheme {
    /// Themes in lookup order (inherited themes after their children).
    themes: Vec<Theme>,
    /// Unthemed fallback directories.
    pixmaps: Vec<PathBuf>,
}

impl IconTheme {
    /// Read index.theme metadata for every theme in `theme_order` found under `base_dirs`.
    pub fn load(base_dirs: &[PathBuf], theme_order: &[String], pixmaps: Vec<PathBuf>) -> Self {
        let themes = theme_order
            .iter()
            .filter_map(|name| {
                let roots: Vec<ThemeRoot> = base_dirs
                    .iter()
                    .map(|base| base.join(name))
                    .filter_map(|path| {
                        let parsed = parse_icon_theme_index(&path)?;
                        Some(ThemeRoot {
                            path,
                            directories: parsed.directories,
                        })
                    })
                    .collect();

                if roots.is_empty() {
                    debug!("Icon theme {name} is not installed");
                    return None;
                }
                Some(Theme {
                    name: name.clone(),
                    roots,
                })
            })
            .collect();

        Self { themes, pixmaps }
    }

    /// True when no theme could be loaded.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Names of the loaded themes, in lookup order.
    pub fn theme_names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// Resolve the first of `names` that any theme provides, closest to `size`.
    ///
    /// Each theme is asked for every name before falling through to the
    /// inherited themes, then the unthemed pixmap directories.
    pub fn resolve(&self, names: &[String], size: u32) -> Option<PathBuf> {
        for theme in &self.themes {
            for name in names {
                if let Some(path) = theme.best_match(name, size) {
                    return Some(path);
                }
            }
        }

        names.iter().find_map(|name| {
            self.pixmaps
                .iter()
                .find_map(|dir| find_icon_file(dir, name))
        })
    }
}

impl Theme {
    fn best_match(&self, name: &str, size: u32) -> Option<PathBuf> {
        let mut best: Option<(u32, PathBuf)> = None;

        for root in &self.roots {
            for dir in &root.directories {
                let distance = dir.size_distance(size);
                if best.as_ref().is_some_and(|(d, _)| *d <= distance) {
                    continue;
                }
                if let Some(path) = find_icon_file(&root.path.join(&dir.relative), name) {
                    if distance == 0 {
                        return Some(path);
                    }
                    best = Some((distance, path));
                }
            }
        }

        best.map(|(_, path)| path)
    }
}

fn find_icon_file(dir: &Path, name: &str) -> Option<PathBuf> {
    ICON_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|candidate| candidate.is_file())
}
