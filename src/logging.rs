//! Logging setup
//!
//! The TUI owns the terminal, so log output goes to a file instead of
//! stderr. By default that is `qkart.log` next to the executable,
//! truncated on every run. The filter comes from `QKART_LOG`
//! (e.g. `QKART_LOG=qkart=debug`) and defaults to `info`.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "QKART_LOG";
const LOG_FILE_NAME: &str = "qkart.log";

/// Default log file path (same directory as executable)
pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path` (or the default path).
///
/// Returns the path actually used, or `None` if the file could not be
/// opened, in which case logging stays disabled rather than scribbling
/// over the UI.
pub fn init(path: Option<&Path>) -> Option<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("[qkart] Cannot open log file {}: {}", path.display(), e);
            return None;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    installed.then_some(path)
}

/// Install a subscriber on stderr, used by the one-shot commands.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_uses_log_file_name() {
        assert_eq!(
            default_log_path().file_name().and_then(|n| n.to_str()),
            Some(LOG_FILE_NAME)
        );
    }

    #[test]
    fn log_file_is_truncated_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qkart.log");
        std::fs::write(&path, "old run\n").unwrap();

        drop(open_log_file(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
