//! Coarse file categories and the type classifier.

use log::debug;
use std::fs::Metadata;
use std::path::Path;

/// Category selected by the leading query token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    File,
    Directory,
    Image,
    Video,
    Audio,
    #[default]
    Any,
}

impl Category {
    /// Map a single-character category code (`f`, `d`, `i`, `v`, `a`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "f" => Some(Category::File),
            "d" => Some(Category::Directory),
            "i" => Some(Category::Image),
            "v" => Some(Category::Video),
            "a" => Some(Category::Audio),
            _ => None,
        }
    }

    /// Top-level MIME type required by media categories.
    fn media_type(&self) -> Option<&'static str> {
        match self {
            Category::Image => Some("image"),
            Category::Video => Some("video"),
            Category::Audio => Some("audio"),
            _ => None,
        }
    }

    /// Decide whether an existing path belongs to this category.
    ///
    /// Media categories go by file name only; contents are never read, so a
    /// misleading extension misclassifies the file.
    pub fn admits(&self, path: &Path, metadata: &Metadata) -> bool {
        match self {
            Category::Any => true,
            Category::File => metadata.is_file(),
            Category::Directory => metadata.is_dir(),
            Category::Image | Category::Video | Category::Audio => {
                let Some(wanted) = self.media_type() else {
                    return false;
                };
                match mime_guess::from_path(path).first() {
                    Some(mime) => mime.type_().as_str() == wanted,
                    None => {
                        debug!(
                            "No MIME type for {}; excluded from {self:?}",
                            path.display()
                        );
                        false
                    }
                }
            }
        }
    }
}
