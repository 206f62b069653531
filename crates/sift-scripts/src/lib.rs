//! sift-scripts: Finds executable `start-*` scripts in a single directory.
//!
//! Results are sorted by name. Only regular, executable files are listed.

pub mod error;
pub mod scanner;

pub use error::ScriptError;
pub use scanner::{SCRIPT_PREFIX, Script, scan_scripts};
