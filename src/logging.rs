// Conditional logging macros - only active in debug builds

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

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

/// Log file used while the full-screen interface owns the terminal.
pub fn get_log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("word-scramble").join("word-scramble.log"))
}

fn open_log_file() -> io::Result<File> {
    let path = get_log_file_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no cache directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::options().create(true).append(true).open(path)
}

/// Install the `env_logger` backend.
///
/// `RUST_LOG` wins over `verbose`. With `to_file` set, records go to
/// [`get_log_file_path`] instead of stderr; if that file can't be opened
/// logging stays on stderr.
pub fn init_logger(verbose: bool, to_file: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let mut file_error = None;
    if to_file {
        match open_log_file() {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => file_error = Some(e),
        }
    }

    // Already initialized (tests, embedding) is fine.
    let _ = builder.try_init();

    if let Some(e) = file_error {
        log::warn!("Could not open log file, logging to stderr: {e}");
    }
}
