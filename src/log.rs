// Author: Dustin Pilgrim
// License: MIT

use std::fmt::Arguments;
use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use once_cell::sync::Lazy;

const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024; // 5 MiB
const DEFAULT_KEEP_BACKUPS: u32 = 3;

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum LogLevel {
    Error = 1,
    Warn  = 2,
    Info  = 3,
    Debug = 4,
}

impl LogLevel {
    /// ANSI color code for terminal output
    fn color(&self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m", // Red
            LogLevel::Warn  => "\x1b[33m", // Yellow
            LogLevel::Info  => "\x1b[36m", // Cyan
            LogLevel::Debug => "\x1b[90m", // Gray
        }
    }

    fn short(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERR",
            LogLevel::Warn  => "WRN",
            LogLevel::Info  => "INF",
            LogLevel::Debug => "DBG",
        }
    }
}

const RESET_COLOR: &str = "\x1b[0m";

pub struct Config {
    pub level: LogLevel,
    pub use_colors: bool,
    pub console: bool,
    /// `None` until the daemon enables file output.
    pub file: Option<PathBuf>,
}

pub static GLOBAL_CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| {
    Mutex::new(Config {
        level: LogLevel::Info,
        use_colors: io::stdout().is_terminal(),
        console: true,
        file: None,
    })
});

pub struct LogPolicy {
    pub max_bytes: u64,
    pub keep_backups: u32,
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            keep_backups: DEFAULT_KEEP_BACKUPS,
        }
    }
}

/// Configure level and console output for this process.
pub fn init(verbose: bool, console: bool) {
    if let Ok(mut config) = GLOBAL_CONFIG.lock() {
        config.level = if verbose { LogLevel::Debug } else { LogLevel::Info };
        config.console = console;
    }
}

/// Rotate if needed, write the run header and start appending log lines to `path`.
pub fn enable_file_output(path: &Path, policy: LogPolicy) -> io::Result<()> {
    let needs_blank = prepare_log_file(path, &policy)?;

    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_blank {
        f.write_all(b"\n")?;
    }
    writeln!(f, "{}", run_header())?;

    if let Ok(mut config) = GLOBAL_CONFIG.lock() {
        config.file = Some(path.to_path_buf());
    }
    Ok(())
}

/// Core logging function
pub fn log_message(level: LogLevel, prefix: &str, args: Arguments) {
    let Ok(config) = GLOBAL_CONFIG.lock() else {
        return;
    };

    if level > config.level {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let file_line = format!("[{}][{}][{}] {}", timestamp, level.short(), prefix, args);

    if let Some(path) = &config.file {
        if let Err(e) = append_line(path, &file_line) {
            eprintln!("Failed to write log: {}", e);
        }
    }

    // Console: everything in debug mode, errors always.
    if config.console && (config.level == LogLevel::Debug || level == LogLevel::Error) {
        let console_line = if config.use_colors {
            format!("{}●{} [{}][{}] {}", level.color(), RESET_COLOR, timestamp, prefix, args)
        } else {
            file_line
        };

        match level {
            LogLevel::Error => eprintln!("{}", console_line),
            _ => println!("{}", console_line),
        }
    }
}

/// Flexible macro to allow formatted logging
#[macro_export]
macro_rules! slog {
    ($level:expr, $prefix:expr, $($arg:tt)*) => {
        $crate::log::log_message($level, $prefix, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! sinfo {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Info, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! swarn {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Warn, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! serror {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Error, $prefix, $($arg)*) };
}

#[macro_export]
macro_rules! sdebug {
    ($prefix:expr, $($arg:tt)*) => { $crate::slog!($crate::log::LogLevel::Debug, $prefix, $($arg)*) };
}

pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("studytimer")
        .join("studytimer.log")
}

fn run_header() -> String {
    let pid = std::process::id();
    format!("==================== studytimer daemon run start (pid={pid}) ====================")
}

/// Ensures the log directory exists and rotates the file if needed.
/// Returns whether to insert a blank line before the next run header.
fn prepare_log_file(path: &Path, policy: &LogPolicy) -> io::Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if meta.len() == 0 {
        return Ok(false);
    }

    if meta.len() >= policy.max_bytes {
        rotate(path, policy.keep_backups);
        return Ok(false);
    }

    Ok(true)
}

fn rotate(path: &Path, keep_backups: u32) {
    if keep_backups == 0 {
        let _ = fs::remove_file(path);
        return;
    }

    for i in (1..keep_backups).rev() {
        let from = rotated_name(path, i);
        if from.exists() {
            let _ = fs::rename(from, rotated_name(path, i + 1));
        }
    }

    let _ = fs::rename(path, rotated_name(path, 1));
}

fn rotated_name(base: &Path, n: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}", base.display(), n))
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}
