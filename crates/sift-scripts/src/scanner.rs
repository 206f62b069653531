//! Directory scan for launchable scripts.

use crate::error::ScriptError;
use log::debug;
use rustix::fs::{Access, access};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Only files whose name starts with this are offered.
pub const SCRIPT_PREFIX: &str = "start-";

/// An executable script found in the scripts directory.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Script {
    pub name: String,
    pub path: PathBuf,
}

/// List executable `start-*` files in `dir` whose name contains `filter`
/// (case-insensitive), sorted by name.
pub fn scan_scripts(dir: &Path, filter: &str) -> Result<Vec<Script>, ScriptError> {
    if !dir.is_dir() {
        return Err(ScriptError::DirectoryNotFound(dir.to_path_buf()));
    }

    let filter = filter.to_lowercase();
    let mut scripts = Vec::new();

    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true);
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(ScriptError::Read {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                debug!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(SCRIPT_PREFIX) || !name.to_lowercase().contains(&filter) {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("Skipping {name}: {e}");
                continue;
            }
        };

        if !metadata.is_file() || !is_executable(entry.path()) {
            continue;
        }

        scripts.push(Script {
            name,
            path: entry.into_path(),
        });
    }

    scripts.sort();
    Ok(scripts)
}

/// Whether the current user may execute `path`, as decided by `access(2)`.
fn is_executable(path: &Path) -> bool {
    match access(path, Access::EXEC_OK) {
        Ok(()) => true,
        Err(e) => {
            debug!("{} is not executable: {e}", path.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn write_file(dir: &Path, name: &str, mode: u32) {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    }

    fn names(scripts: &[Script]) -> Vec<&str> {
        scripts.iter().map(|s| s.name.as_str()).collect()
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "start-deploy.sh", 0o755);
        write_file(dir.path(), "start-build", 0o700);
        write_file(dir.path(), "README", 0o644);
        write_file(dir.path(), "start-old", 0o644);
        fs::create_dir(dir.path().join("start-dir")).unwrap();
        dir
    }

    #[test]
    fn test_lists_executable_prefixed_files_sorted() {
        let dir = fixture();
        let scripts = scan_scripts(dir.path(), "").unwrap();
        assert_eq!(names(&scripts), vec!["start-build", "start-deploy.sh"]);
        assert_eq!(scripts[0].path, dir.path().join("start-build"));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let dir = fixture();
        let scripts = scan_scripts(dir.path(), "DEPLOY").unwrap();
        assert_eq!(names(&scripts), vec!["start-deploy.sh"]);

        assert!(scan_scripts(dir.path(), "nothing").unwrap().is_empty());
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "Start-upper", 0o755);
        assert!(scan_scripts(dir.path(), "").unwrap().is_empty());
    }

    #[test]
    fn test_follows_symlinks_to_executables() {
        let dir = tempfile::tempdir().unwrap();
        let store = tempfile::tempdir().unwrap();
        write_file(store.path(), "real-script", 0o755);
        std::os::unix::fs::symlink(
            store.path().join("real-script"),
            dir.path().join("start-linked"),
        )
        .unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("start-broken"))
            .unwrap();

        let scripts = scan_scripts(dir.path(), "").unwrap();
        assert_eq!(names(&scripts), vec!["start-linked"]);
    }

    #[test]
    fn test_group_and_other_bits_do_not_grant_owner() {
        // Permission bits do not restrict root.
        if rustix::process::geteuid().is_root() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "start-not-mine", 0o611);
        write_file(dir.path(), "start-mine", 0o700);

        let scripts = scan_scripts(dir.path(), "").unwrap();
        assert_eq!(names(&scripts), vec!["start-mine"]);
    }

    #[test]
    fn test_unreadable_directory_is_a_read_error() {
        if rustix::process::geteuid().is_root() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("bin");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = scan_scripts(&locked, "");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        match result {
            Err(ScriptError::Read { path, .. }) => assert_eq!(path, locked),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("bin");
        match scan_scripts(&missing, "") {
            Err(ScriptError::DirectoryNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected DirectoryNotFound, got {other:?}"),
        }
    }
}
