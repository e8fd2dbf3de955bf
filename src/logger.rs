use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::warn;

const DEFAULT_LOG_FILE: &str = "logfile.txt";
const LOG_EXTENSION: &str = ".txt";

/// Default number of retained log lines.
pub const DEFAULT_MAX_MESSAGES: usize = 5;

/// Severity tag written in front of each log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

/// Appends `"[LEVEL] message"` lines to a text file, keeping at most
/// `max_messages` lines by rewriting the file without its oldest entries
/// before each append.
///
/// Logging is best effort: a missing file counts as empty history and write
/// failures are reported to the diagnostic log but never propagated, so a
/// failing logger cannot abort the operation that called it.
#[derive(Debug)]
pub struct RotatingLogger {
    path: PathBuf,
    max_messages: usize,
}

impl RotatingLogger {
    /// Creates a logger writing to `path`, resolved as follows: an empty
    /// path becomes `logfile.txt`; a path ending in a directory separator
    /// gets `logfile.txt` appended; a path without the `.txt` extension gets
    /// `.txt` appended.
    pub fn new(path: &str, max_messages: usize) -> Self {
        Self {
            path: Self::resolve_path(path),
            max_messages,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn resolve_path(raw: &str) -> PathBuf {
        if raw.is_empty() {
            return PathBuf::from(DEFAULT_LOG_FILE);
        }
        if raw.ends_with('/') || raw.ends_with('\\') {
            return PathBuf::from(format!("{raw}{DEFAULT_LOG_FILE}"));
        }
        if raw.ends_with(LOG_EXTENSION) {
            return PathBuf::from(raw);
        }
        PathBuf::from(format!("{raw}{LOG_EXTENSION}"))
    }

    /// Logs `message` at [`LogLevel::Info`].
    pub fn log(&self, message: &str) {
        self.log_at(message, LogLevel::Info);
    }

    /// Logs `message` at `level`, trimming the oldest entries first so the
    /// file never exceeds `max_messages` lines. Never fails.
    pub fn log_at(&self, message: &str, level: LogLevel) {
        if let Err(error) = self.append(message, level) {
            warn!(
                "could not append to log file {}: {error}",
                self.path.display()
            );
        }
    }

    fn append(&self, message: &str, level: LogLevel) -> io::Result<()> {
        self.trim_oldest_for_append()?;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "[{level}] {message}")
    }

    /// Rewrites the log file without its oldest lines so that one more entry
    /// still fits under the cap. A file that cannot be read counts as empty
    /// history.
    fn trim_oldest_for_append(&self) -> io::Result<()> {
        let existing: Vec<String> = match fs::read_to_string(&self.path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => return Ok(()),
        };

        let total = existing.len() + 1;
        if total <= self.max_messages {
            return Ok(());
        }

        let remove_count = total - self.max_messages;
        if remove_count >= existing.len() {
            return fs::write(&self.path, "");
        }

        let mut kept = String::new();
        for line in &existing[remove_count..] {
            kept.push_str(line);
            kept.push('\n');
        }
        fs::write(&self.path, kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_empty_path_resolves_to_default_file() {
        assert_eq!(RotatingLogger::resolve_path(""), Path::new("logfile.txt"));
    }

    #[test]
    fn test_directory_path_gets_default_file_appended() {
        assert_eq!(
            RotatingLogger::resolve_path("logs/"),
            Path::new("logs/logfile.txt")
        );
        assert_eq!(
            RotatingLogger::resolve_path("logs\\"),
            Path::new("logs\\logfile.txt")
        );
    }

    #[test]
    fn test_missing_extension_gets_appended() {
        assert_eq!(RotatingLogger::resolve_path("app"), Path::new("app.txt"));
        assert_eq!(
            RotatingLogger::resolve_path("app.txt"),
            Path::new("app.txt")
        );
    }

    #[test]
    fn test_log_formats_level_and_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fmt.txt");
        let logger = RotatingLogger::new(path.to_str().unwrap(), DEFAULT_MAX_MESSAGES);

        logger.log("plain");
        logger.log_at("careful", LogLevel::Warning);
        logger.log_at("broken", LogLevel::Error);

        assert_eq!(
            read_lines(logger.path()),
            vec!["[INFO] plain", "[WARNING] careful", "[ERROR] broken"]
        );
    }

    #[test]
    fn test_missing_log_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");
        let logger = RotatingLogger::new(path.to_str().unwrap(), DEFAULT_MAX_MESSAGES);

        logger.log("first");
        assert_eq!(read_lines(logger.path()), vec!["[INFO] first"]);
    }

    #[test]
    fn test_six_messages_drop_the_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cap.txt");
        let logger = RotatingLogger::new(path.to_str().unwrap(), 5);

        for i in 1..=6 {
            logger.log(&format!("m{i}"));
        }

        let expected: Vec<String> = (2..=6).map(|i| format!("[INFO] m{i}")).collect();
        assert_eq!(read_lines(logger.path()), expected);
    }

    #[test]
    fn test_seven_messages_keep_third_through_seventh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cap7.txt");
        let logger = RotatingLogger::new(path.to_str().unwrap(), 5);

        for i in 1..=7 {
            logger.log(&format!("m{i}"));
        }

        let expected: Vec<String> = (3..=7).map(|i| format!("[INFO] m{i}")).collect();
        assert_eq!(read_lines(logger.path()), expected);
    }

    #[test]
    fn test_cap_of_one_truncates_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.txt");
        let logger = RotatingLogger::new(path.to_str().unwrap(), 1);

        logger.log("old");
        logger.log("new");

        assert_eq!(read_lines(logger.path()), vec!["[INFO] new"]);
    }

    #[test]
    fn test_unwritable_path_does_not_panic() {
        let logger = RotatingLogger::new("no-such-dir/deep/", DEFAULT_MAX_MESSAGES);
        logger.log("goes nowhere");
    }
}
