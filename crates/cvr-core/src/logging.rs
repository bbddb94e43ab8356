//! Logging init: file under the XDG state dir, or graceful fallback to stderr.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,cvr=debug"))
}

fn open_log_file() -> anyhow::Result<(fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cvr")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("cvr.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Initialize structured logging to `~/.local/state/cvr/cvr.log`.
/// If the log dir is unwritable the subscriber writes to stderr instead.
pub fn init() {
    match open_log_file() {
        Ok((file, path)) => {
            let writer = move || -> Box<dyn io::Write + Send> {
                match file.try_clone() {
                    Ok(f) => Box::new(f),
                    Err(_) => Box::new(io::stderr()),
                }
            };
            tracing_subscriber::fmt()
                .with_env_filter(default_filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            tracing::info!("cvr logging initialized at {}", path.display());
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(default_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
        }
    }
}
