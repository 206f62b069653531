//! sift-recent - Search the desktop "recently used files" store
//!
//! Pipeline:
//! - Locate the first existing `recently-used.xbel`
//! - Parse its top-level bookmarks in document order
//! - Keep entries that still exist and match the category and name filter
//! - Reverse, so the entries appended last come first
//! - Resolve an icon per result

pub mod category;
pub mod error;
pub mod query;
pub mod store;
pub mod xbel;

pub use category::Category;
pub use error::RecentError;
pub use query::{IconOptions, QueryResult, RecentQuery, display_name, filter_and_order, search_recent};
pub use store::{STORE_CANDIDATES, candidate_paths, locate_store};
pub use xbel::{BookmarkRecord, parse_bookmarks, parse_store};
