//! sift-icons: Themed file icon resolver for Linux desktops.
//!
//! Provides:
//! - Icon theme lookup with theme inheritance and size-aware directory matching
//! - Content-type detection from file names (no file contents are read)
//! - A no-op lookup for systems without icon themes
//! - `resolve_icon`, which always ends in a usable icon reference

mod error;
mod icons;
mod lookup;
mod paths;
mod resolver;

pub use error::IconError;
pub use icons::IconTheme;
pub use lookup::{
    DIRECTORY_CONTENT_TYPE, IconLookup, NoThemeLookup, ThemeIconLookup, content_type, detect,
    icon_names,
};
pub use paths::{get_icon_base_directories, get_icon_theme_order, get_pixmap_directories};
pub use resolver::{IMAGE_EXTENSIONS, IconRef, resolve_icon};
