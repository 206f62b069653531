//! Recent-files query pipeline: locate, parse, filter, order, enrich.

use crate::category::Category;
use crate::error::RecentError;
use crate::store::locate_store;
use crate::xbel::{BookmarkRecord, parse_store};
use log::{debug, info};
use sift_icons::{IconLookup, IconRef, resolve_icon};
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed query: optional category code followed by a search term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentQuery {
    pub category: Category,
    /// Lowercased substring matched against base names.
    pub term: String,
}

impl RecentQuery {
    /// `"d report"` selects directories matching `report`; `"report"` matches anything.
    pub fn parse(raw: &str) -> Self {
        let mut tokens = raw.split_whitespace();

        if let Some(category) = tokens.next().and_then(Category::from_code) {
            return Self {
                category,
                term: tokens.collect::<Vec<_>>().join(" ").to_lowercase(),
            };
        }

        Self {
            category: Category::Any,
            term: raw.trim().to_lowercase(),
        }
    }

    fn matches_name(&self, path: &Path) -> bool {
        display_name(path).to_lowercase().contains(&self.term)
    }
}

/// One enriched search hit, ready for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryResult {
    pub path: PathBuf,
    pub display_name: String,
    pub icon: IconRef,
}

/// Icon settings for enrichment.
pub struct IconOptions<'a> {
    pub lookup: &'a dyn IconLookup,
    pub size: u32,
    pub default_icon: &'a str,
}

/// Base name of a path, or the whole path when it has none (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Keep records that exist, fit the category and match the term, newest first.
///
/// Existence is checked against the live filesystem. "Newest" means last in
/// the bookmark file; timestamps are not consulted.
pub fn filter_and_order(records: Vec<BookmarkRecord>, query: &RecentQuery) -> Vec<BookmarkRecord> {
    let mut kept: Vec<BookmarkRecord> = records
        .into_iter()
        .filter(|record| {
            let metadata = match fs::metadata(&record.path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    debug!(
                        "Skipping {}: {e}",
                        record.path.display()
                    );
                    return false;
                }
            };
            query.category.admits(&record.path, &metadata) && query.matches_name(&record.path)
        })
        .collect();

    kept.reverse();
    kept
}

/// Run a full query against the store under `home`.
///
/// The result is not truncated; presentation caps it.
pub fn search_recent(
    raw_query: &str,
    home: &Path,
    icons: &IconOptions<'_>,
) -> Result<Vec<QueryResult>, RecentError> {
    let query = RecentQuery::parse(raw_query);
    let store = locate_store(home)?;
    let records = parse_store(&store)?;
    let total = records.len();

    let results: Vec<QueryResult> = filter_and_order(records, &query)
        .into_iter()
        .map(|record| QueryResult {
            display_name: display_name(&record.path),
            icon: resolve_icon(icons.lookup, &record.path, icons.size, icons.default_icon),
            path: record.path,
        })
        .collect();

    info!(
        "Query {query:?} kept {} of {total} bookmarks",
        results.len()
    );
    Ok(results)
}
