//! Path to icon resolution with a default fallback.

use crate::lookup::IconLookup;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// Extensions whose files are shown as their own icon.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "svg", "gif"];

/// What the host should display next to a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconRef {
    /// The image file itself.
    Image(PathBuf),
    /// An icon file from the desktop icon theme.
    Themed(PathBuf),
    /// The extension's bundled default icon.
    Default(String),
}

impl IconRef {
    pub fn is_default(&self) -> bool {
        matches!(self, IconRef::Default(_))
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconRef::Image(path) | IconRef::Themed(path) => write!(f, "{}", path.display()),
            IconRef::Default(id) => f.write_str(id),
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Resolve the icon for `path`. Never fails: any lookup error yields `default_icon`.
pub fn resolve_icon(
    lookup: &dyn IconLookup,
    path: &Path,
    size: u32,
    default_icon: &str,
) -> IconRef {
    if has_image_extension(path) {
        return IconRef::Image(path.to_path_buf());
    }

    match lookup.lookup(path, size) {
        Ok(icon) => IconRef::Themed(icon),
        Err(e) => {
            debug!(
                "{} lookup for {} failed: {e}",
                lookup.name(),
                path.display()
            );
            IconRef::Default(default_icon.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use crate::lookup::NoThemeLookup;

    const DEFAULT: &str = "images/icon.svg";

    struct FixedLookup(PathBuf);

    impl IconLookup for FixedLookup {
        fn lookup(&self, _path: &Path, _size: u32) -> Result<PathBuf, IconError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_svg_is_its_own_icon_without_theme() {
        let path = Path::new("/home/u/Pictures/logo.svg");
        let icon = resolve_icon(&NoThemeLookup, path, 32, DEFAULT);
        assert_eq!(icon, IconRef::Image(path.to_path_buf()));
    }

    #[test]
    fn test_image_extension_is_case_insensitive() {
        let fixed = FixedLookup(PathBuf::from("/themes/x.png"));
        let path = Path::new("/home/u/DSC_0001.JPG");
        assert_eq!(
            resolve_icon(&fixed, path, 32, DEFAULT),
            IconRef::Image(path.to_path_buf())
        );
    }

    #[test]
    fn test_themed_icon_when_lookup_succeeds() {
        let fixed = FixedLookup(PathBuf::from("/themes/text-plain.png"));
        let icon = resolve_icon(&fixed, Path::new("/home/u/notes.txt"), 32, DEFAULT);
        assert_eq!(icon, IconRef::Themed(PathBuf::from("/themes/text-plain.png")));
        assert_eq!(icon.to_string(), "/themes/text-plain.png");
    }

    #[test]
    fn test_default_when_lookup_fails() {
        let icon = resolve_icon(&NoThemeLookup, Path::new("/home/u/notes.txt"), 32, DEFAULT);
        assert!(icon.is_default());
        assert_eq!(icon.to_string(), DEFAULT);
    }
}
