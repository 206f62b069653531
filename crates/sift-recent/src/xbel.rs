//! XBEL bookmark file parsing.
//!
//! Only the `href` of each top-level `<bookmark>` is read. Everything else in
//! the file (titles, applications, groups, visit stamps) is ignored.

use crate::error::RecentError;
use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::os::unix::ffi::OsStringExt;
use std::path::{Path, PathBuf};

const ROOT_ELEMENT: &[u8] = b"xbel";
const BOOKMARK_ELEMENT: &[u8] = b"bookmark";
const FILE_SCHEME: &str = "file://";

/// One `<bookmark>` entry of the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookmarkRecord {
    /// Filesystem path decoded from the href.
    pub path: PathBuf,
    /// The href exactly as written in the file.
    pub raw_href: String,
}

impl BookmarkRecord {
    /// `None` unless the href is a `file://` URI naming an absolute path.
    pub fn from_href(href: &str) -> Option<Self> {
        Some(Self {
            path: path_from_href(href)?,
            raw_href: href.to_string(),
        })
    }
}

/// Turn a `file://` URI into an absolute path. Percent escapes may encode
/// non-UTF-8 bytes. Other schemes and relative paths give `None`.
pub fn path_from_href(href: &str) -> Option<PathBuf> {
    let raw = href.strip_prefix(FILE_SCHEME)?;
    let bytes = urlencoding::decode_binary(raw.as_bytes()).into_owned();
    let path = PathBuf::from(OsString::from_vec(bytes));
    path.is_absolute().then_some(path)
}

/// Read and parse the bookmark file at `path`, in document order.
pub fn parse_store(path: &Path) -> Result<Vec<BookmarkRecord>, RecentError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            RecentError::Parse {
                path: path.to_path_buf(),
                reason: "file is not valid UTF-8".to_string(),
            }
        } else {
            RecentError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let records = parse_bookmarks(&content).map_err(|reason| RecentError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;

    debug!(
        "Parsed {} bookmarks from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse XBEL text into bookmark records, in document order.
pub fn parse_bookmarks(content: &str) -> Result<Vec<BookmarkRecord>, String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("{e} at byte {}", reader.error_position()))?;

        match event {
            Event::Start(e) => {
                if depth == 0 {
                    open_root(&e, &mut seen_root)?;
                } else if depth == 1 && e.local_name().as_ref() == BOOKMARK_ELEMENT {
                    push_bookmark(&e, &mut records)?;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    open_root(&e, &mut seen_root)?;
                } else if depth == 1 && e.local_name().as_ref() == BOOKMARK_ELEMENT {
                    push_bookmark(&e, &mut records)?;
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| "unexpected closing tag".to_string())?;
            }
            Event::Text(_) | Event::CData(_) if depth == 0 => {
                return Err("text outside the root element".to_string());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err("unexpected end of document".to_string());
    }
    if !seen_root {
        return Err("missing <xbel> root element".to_string());
    }

    Ok(records)
}

fn open_root(e: &BytesStart<'_>, seen_root: &mut bool) -> Result<(), String> {
    if *seen_root {
        return Err("more than one root element".to_string());
    }
    if e.local_name().as_ref() != ROOT_ELEMENT {
        return Err(format!(
            "root element is <{}>, expected <xbel>",
            String::from_utf8_lossy(e.name().as_ref())
        ));
    }
    *seen_root = true;
    Ok(())
}

fn push_bookmark(e: &BytesStart<'_>, records: &mut Vec<BookmarkRecord>) -> Result<(), String> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        if attr.key.local_name().as_ref() == b"href" {
            let href = attr.unescape_value().map_err(|err| err.to_string())?;
            if href.is_empty() {
                debug!("Skipping bookmark with empty href");
                return Ok(());
            }
            match BookmarkRecord::from_href(&href) {
                Some(record) => records.push(record),
                None => debug!("Skipping bookmark that is not a local file: {href}"),
            }
            return Ok(());
        }
    }

    debug!("Skipping bookmark without href");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xbel version="1.0"
      xmlns:bookmark="http://www.freedesktop.org/standards/desktop-bookmarks"
      xmlns:mime="http://www.freedesktop.org/standards/shared-mime-info">
  <bookmark href="file:///home/u/first.txt" added="2024-01-01T10:00:00Z">
    <info>
      <metadata owner="http://freedesktop.org">
        <mime:mime-type type="text/plain"/>
        <bookmark:applications>
          <bookmark:application name="gedit" exec="&apos;gedit %u&apos;" count="1"/>
        </bookmark:applications>
      </metadata>
    </info>
  </bookmark>
  <bookmark href="file:///home/u/My%20Documents/report%C3%A9.pdf"/>
  <bookmark href="file:///home/u/a&amp;b.txt"></bookmark>
</xbel>
"#;

    #[test]
    fn test_parse_in_document_order() {
        let records = parse_bookmarks(STORE).unwrap();
        let paths: Vec<_> = records.iter().map(|r| r.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/home/u/first.txt"),
                PathBuf::from("/home/u/My Documents/reporté.pdf"),
                PathBuf::from("/home/u/a&b.txt"),
            ]
        );
        assert_eq!(
            records[1].raw_href,
            "file:///home/u/My%20Documents/report%C3%A9.pdf"
        );
    }

    #[test]
    fn test_nested_bookmark_elements_are_ignored() {
        // Only direct children of <xbel> are bookmarks; the nested one lives in a folder.
        let xml = r#"<xbel><folder><bookmark href="file:///nested"/></folder><bookmark href="file:///top"/></xbel>"#;
        let records = parse_bookmarks(xml).unwrap();
        assert_eq!(records, vec![BookmarkRecord::from_href("file:///top").unwrap()]);
    }

    #[test]
    fn test_only_local_absolute_files_are_kept() {
        let xml = r#"<xbel>
  <bookmark href="https://example.org/page.html"/>
  <bookmark href="trash:///old.txt"/>
  <bookmark href="relative/notes.txt"/>
  <bookmark href="file://host-relative.txt"/>
  <bookmark href="file:///home/u/kept.txt"/>
</xbel>"#;
        let records = parse_bookmarks(xml).unwrap();
        let paths: Vec<_> = records.iter().map(|r| r.path.clone()).collect();
        assert_eq!(paths, vec![PathBuf::from("/home/u/kept.txt")]);
    }

    #[test]
    fn test_empty_store_has_no_records() {
        assert!(parse_bookmarks("<xbel version=\"1.0\"/>").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        assert!(parse_bookmarks("<xbel><bookmark href=\"file:///a\"></xbel>").is_err());
        assert!(parse_bookmarks("<xbel><bookmark href=\"file:///a\"/>").is_err());
        assert!(parse_bookmarks("not xml at all").is_err());
        assert!(parse_bookmarks("").is_err());
        assert!(parse_bookmarks("<html></html>").is_err());
    }

    #[test]
    fn test_non_utf8_percent_escapes_survive() {
        use std::os::unix::ffi::OsStrExt;

        let path = path_from_href("file:///tmp/caf%E9").unwrap();
        assert_eq!(path.as_os_str().as_bytes(), b"/tmp/caf\xe9");
    }

    #[test]
    fn test_parse_store_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recently-used.xbel");
        std::fs::write(&path, "<xbel><bookmark").unwrap();

        match parse_store(&path) {
            Err(RecentError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }
}
