// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const LOG_DIR_NAME: &str = "hangman";
const LOG_FILE_NAME: &str = "hangman.log";
const DEFAULT_FILTER: &str = "info";

/// `<cache dir>/hangman/hangman.log`, or the same under the temp dir when the
/// platform has no cache directory.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR_NAME)
        .join(LOG_FILE_NAME)
}

/// Opens `path` for appending. If that fails, falls back to stderr only when
/// `stderr_fallback` is set.
fn open_log_target(path: &Path, stderr_fallback: bool) -> io::Result<Target> {
    let opened = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(path));
    match opened {
        Ok(file) => Ok(Target::Pipe(Box::new(file))),
        Err(e) if stderr_fallback => {
            eprintln!("Cannot open log file {}: {e}; logging to stderr", path.display());
            Ok(Target::Stderr)
        }
        Err(e) => Err(e),
    }
}

/// Installs the global logger, appending to `log_file`.
///
/// Pass `stderr_fallback = false` while a full-screen interface owns the
/// terminal; logging is then disabled instead of drawn over the screen.
/// `RUST_LOG` overrides the filter.
pub fn init_logging(log_file: &Path, stderr_fallback: bool) -> io::Result<()> {
    let target = open_log_target(log_file, stderr_fallback)?;
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    builder.target(target);

    builder.try_init().map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_default_log_path_shape() {
        let path = default_log_path();
        assert!(path.ends_with(Path::new(LOG_DIR_NAME).join(LOG_FILE_NAME)));
    }

    #[test]
    fn test_log_target_opens_file() {
        let path = std::env::temp_dir()
            .join("hangman_log_target_test")
            .join(LOG_FILE_NAME);
        let target = open_log_target(&path, false).unwrap();
        assert!(matches!(target, Target::Pipe(_)));
        assert!(path.exists());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_unopenable_log_file_without_fallback_is_an_error() {
        // A regular file cannot serve as the log directory
        let blocker = std::env::temp_dir().join("hangman_log_blocker_a");
        File::create(&blocker).unwrap();
        let path = blocker.join(LOG_FILE_NAME);

        assert!(open_log_target(&path, false).is_err());
        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_unopenable_log_file_with_fallback_uses_stderr() {
        let blocker = std::env::temp_dir().join("hangman_log_blocker_b");
        File::create(&blocker).unwrap();
        let path = blocker.join(LOG_FILE_NAME);

        let target = open_log_target(&path, true).unwrap();
        assert!(matches!(target, Target::Stderr));
        let _ = fs::remove_file(&blocker);
    }
}
