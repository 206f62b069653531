//! Running the action of a picked result.

use crate::extensions::Action;
use log::info;
use std::process::{Command, Stdio};

/// Spawn the action detached from the launcher; does not wait for it.
pub fn execute(action: &Action) -> Result<(), std::io::Error> {
    let mut command = match action {
        Action::Open { path } => {
            let mut command = Command::new("xdg-open");
            command.arg(path);
            command
        }
        Action::RunScript { path } => Command::new(path),
    };

    info!("Executing {action:?}");
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_script_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let action = Action::RunScript {
            path: dir.path().join("start-nothing"),
        };
        assert!(execute(&action).is_err());
    }
}
