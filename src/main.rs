//! sift - Launcher extensions for recently used files and start scripts
//!
//! Invoked by the launcher once per keystroke; prints the result list as JSON.
//!
//! ```text
//! sift query <keyword> [text...]   print results for the typed text
//! sift open <path>                 open a path with the default handler
//! sift run <path>                  run a script
//! ```

mod actions;
mod extensions;
mod preferences;

use extensions::Action;
use log::info;
use preferences::Preferences;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

const USAGE: &str = "usage: sift query <keyword> [text...] | sift open <path> | sift run <path>";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [cmd, keyword, rest @ ..] if cmd == "query" => {
            let prefs = Preferences::default_path()
                .map(|path| Preferences::load(&path))
                .unwrap_or_default();
            let icons = sift_icons::detect();

            let query = rest.join(" ");
            info!("Query {keyword:?} {query:?} (icons: {})", icons.name());
            let items = extensions::handle_query(keyword, &query, &prefs, &*icons);

            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer(&mut stdout, &items)?;
            writeln!(stdout)?;
        }
        [cmd, path] if cmd == "open" => {
            actions::execute(&Action::Open {
                path: PathBuf::from(path),
            })?;
        }
        [cmd, path] if cmd == "run" => {
            actions::execute(&Action::RunScript {
                path: PathBuf::from(path),
            })?;
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
