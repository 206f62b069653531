//! Path helpers for XDG icon directories and icon theme metadata.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

/// Theme every freedesktop icon theme ultimately falls back to.
pub const FALLBACK_THEME: &str = "hicolor";

/// Get base icon directories (XDG + Flatpak + Snap).
pub fn get_icon_base_directories() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let home = dirs::home_dir().unwrap_or_default();

    let xdg_data_home = dirs::data_dir().unwrap_or_else(|| home.join(".local/share"));
    let xdg_data_dirs = std::env::var("XDG_DATA_DIRS")
        .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());

    // User icons
    dirs.push(home.join(".icons"));
    dirs.push(xdg_data_home.join("icons"));

    // System icons
    for data_dir in xdg_data_dirs.split(':') {
        if !data_dir.is_empty() {
            dirs.push(PathBuf::from(data_dir).join("icons"));
        }
    }

    // App formats (flatpak, snap)
    dirs.push(PathBuf::from("/var/lib/flatpak/exports/share/icons"));
    dirs.push(home.join(".local/share/flatpak/exports/share/icons"));
    dirs.push(PathBuf::from("/var/lib/snapd/desktop/icons"));

    dirs
}

/// Unthemed icon directories searched after every theme.
pub fn get_pixmap_directories() -> Vec<PathBuf> {
    let xdg_data_dirs = std::env::var("XDG_DATA_DIRS")
        .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());

    let mut dirs: Vec<PathBuf> = xdg_data_dirs
        .split(':')
        .filter(|d| !d.is_empty())
        .map(|d| PathBuf::from(d).join("pixmaps"))
        .collect();

    let standard = PathBuf::from("/usr/share/pixmaps");
    if !dirs.contains(&standard) {
        dirs.push(standard);
    }
    dirs
}

/// How a theme subdirectory matches requested sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectoryKind {
    Fixed,
    Scalable,
    Threshold,
}

/// One `Directories=` entry of an index.theme file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDirectory {
    pub relative: String,
    pub size: u32,
    pub min_size: u32,
    pub max_size: u32,
    pub threshold: u32,
    pub kind: DirectoryKind,
}

impl ThemeDirectory {
    /// Distance between the requested size and what this directory provides.
    /// Zero means the directory is an exact match.
    pub fn size_distance(&self, size: u32) -> u32 {
        match self.kind {
            DirectoryKind::Fixed => self.size.abs_diff(size),
            DirectoryKind::Scalable => {
                if size < self.min_size {
                    self.min_size - size
                } else if size > self.max_size {
                    size - self.max_size
                } else {
                    0
                }
            }
            DirectoryKind::Threshold => {
                let low = self.size.saturating_sub(self.threshold);
                let high = self.size.saturating_add(self.threshold);
                if size < low {
                    low - size
                } else if size > high {
                    size - high
                } else {
                    0
                }
            }
        }
    }
}

/// Parsed index.theme content.
#[derive(Debug, Default)]
pub struct ParsedIconTheme {
    pub directories: Vec<ThemeDirectory>,
    pub inherits: Vec<String>,
}

pub fn parse_icon_theme_index(theme_root: &Path) -> Option<ParsedIconTheme> {
    let content = fs::read_to_string(theme_root.join("index.theme")).ok()?;
    Some(parse_icon_theme_content(&content))
}

fn parse_icon_theme_content(content: &str) -> ParsedIconTheme {
    let mut listed = Vec::new();
    let mut inherits = Vec::new();
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut section = String::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = line[1..line.len() - 1].to_string();
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };
        let (k, v) = (k.trim(), v.trim());

        if section.eq_ignore_ascii_case("Icon Theme") {
            if k == "Directories" {
                listed = split_list(v);
            } else if k == "Inherits" {
                inherits = split_list(v);
            }
        } else {
            sections
                .entry(section.clone())
                .or_default()
                .insert(k.to_string(), v.to_string());
        }
    }

    let directories = listed
        .into_iter()
        .map(|relative| {
            let keys = sections.get(&relative);
            let number = |key: &str| keys.and_then(|m| m.get(key)).and_then(|v| v.parse::<u32>().ok());

            let size = number("Size").unwrap_or(0);
            let kind = match keys.and_then(|m| m.get("Type")).map(String::as_str) {
                Some("Fixed") => DirectoryKind::Fixed,
                Some("Scalable") => DirectoryKind::Scalable,
                _ => DirectoryKind::Threshold,
            };

            ThemeDirectory {
                size,
                min_size: number("MinSize").unwrap_or(size),
                max_size: number("MaxSize").unwrap_or(size),
                threshold: number("Threshold").unwrap_or(2),
                kind,
                relative,
            }
        })
        .collect();

    ParsedIconTheme {
        directories,
        inherits,
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Icon theme picked by the user in GTK settings, if any.
pub fn get_configured_icon_theme() -> Option<String> {
    let config = dirs::config_dir()?;

    ["gtk-4.0", "gtk-3.0"].iter().find_map(|gtk| {
        let content = fs::read_to_string(config.join(gtk).join("settings.ini")).ok()?;
        content.lines().find_map(|line| {
            let (k, v) = line.split_once('=')?;
            (k.trim() == "gtk-icon-theme-name")
                .then(|| v.trim().trim_matches('"').to_string())
                .filter(|v| !v.is_empty())
        })
    })
}

/// Get ordered list of icon themes from system config.
pub fn get_icon_theme_order(base_dirs: &[PathBuf]) -> Vec<String> {
    let mut themes = Vec::new();

    if let Some(theme) = get_configured_icon_theme() {
        themes.push(theme);
    }

    themes.push("Adwaita".to_string());

    resolve_theme_inheritance(themes, base_dirs)
}

/// Expand theme inheritance breadth-first. `hicolor` always ends the list.
pub fn resolve_theme_inheritance(start_themes: Vec<String>, base_dirs: &[PathBuf]) -> Vec<String> {
    let mut result = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from(start_themes);

    while let Some(theme) = queue.pop_front() {
        if theme == FALLBACK_THEME || !visited.insert(theme.clone()) {
            continue;
        }
        result.push(theme.clone());

        for base in base_dirs {
            if let Some(parsed) = parse_icon_theme_index(&base.join(&theme)) {
                for parent in parsed.inherits {
                    if !visited.contains(&parent) {
                        queue.push_back(parent);
                    }
                }
                break; // Only parse first found theme instance
            }
        }
    }

    result.push(FALLBACK_THEME.to_string());
    result
}
