//! Run logging: level-routed console output plus an optional per-run log file.
//!
//! The log file is created lazily in the configured directory the first time
//! a file-bound message is written, so runs that log nothing leave no file.


use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;
use strum_macros::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    ConsoleOnly,
    ConsoleAndFile,
    #[default]
    FileOnly,
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }

    fn file(self) -> bool {
        matches!(self, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
    }
}

/// Info goes to stdout; warnings and errors go to stderr with a level prefix.
fn write_console(level: LogLevel, message: &str) {
    match level {
        LogLevel::Info => println!("{message}"),
        LogLevel::Warn | LogLevel::Error => eprintln!("{level}: {message}"),
    }
}

enum RunFile {
    Pending(PathBuf),
    Open { file: File, path: PathBuf },
    Unavailable(PathBuf),
}

impl RunFile {
    fn dir(&self) -> &Path {
        match self {
            RunFile::Pending(dir) | RunFile::Unavailable(dir) => dir,
            RunFile::Open { path, .. } => path.parent().unwrap_or(path),
        }
    }

    fn open(dir: &Path) -> std::io::Result<(File, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("run-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((file, path))
    }

    fn file(&mut self) -> Option<&mut File> {
        if let RunFile::Pending(dir) = self {
            let dir = dir.clone();
            *self = match Self::open(&dir) {
                Ok((file, path)) => RunFile::Open { file, path },
                Err(err) => {
                    eprintln!("WARN: Run log unavailable; allocating without a log file. ({err})");
                    RunFile::Unavailable(dir)
                }
            };
        }
        match self {
            RunFile::Open { file, .. } => Some(file),
            _ => None,
        }
    }
}

/// Cheap to clone; clones share the same log file.
#[derive(Clone)]
pub struct Logger {
    run_file: Arc<Mutex<RunFile>>,
    file_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            run_file: Arc::new(Mutex::new(RunFile::Pending(PathBuf::from("logs")))),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() {
            write_console(level, message);
        }
        if !target.file() || !self.file_enabled.load(Ordering::SeqCst) {
            return;
        }
        if let Ok(mut run_file) = self.run_file.lock() {
            if let Some(file) = run_file.file() {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "[{timestamp}] {:<5} {message}", level.to_string());
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Ignored once the log file has been opened.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut run_file) = self.run_file.lock() {
            if let RunFile::Pending(current) = &mut *run_file {
                *current = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.run_file
            .lock()
            .ok()
            .map(|run_file| run_file.dir().to_path_buf())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        let run_file = self.run_file.lock().ok()?;
        match &*run_file {
            RunFile::Open { path, .. } => Some(path.clone()),
            _ => None,
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .field("file_enabled", &self.file_logging_enabled())
            .finish()
    }
}
