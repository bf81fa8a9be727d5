use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only log of one crawl run
///
/// Each run gets its own file in the log directory, named after the run's
/// start time. Visited URLs are recorded before their fetch attempt, one
/// per line; recoverable cache anomalies and fatal branch failures are
/// appended to the same file for auditability.
#[derive(Debug, Clone)]
pub struct VisitLog {
    path: PathBuf,
}

impl VisitLog {
    /// Creates the log directory (if missing) and a fresh log file path
    ///
    /// The file itself is created lazily by the first [`record`](Self::record).
    pub fn create(log_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = log_dir.into();
        fs::create_dir_all(&dir)?;

        let filename = Local::now().format("%y%m%d_%H%M%S.txt").to_string();
        Ok(Self {
            path: dir.join(filename),
        })
    }

    /// Appends one line to the run log
    pub fn record(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }

    /// Returns the log file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_makes_log_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("log");
        let _log = VisitLog::create(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_records_append_one_line_each() {
        let tmp = TempDir::new().unwrap();
        let log = VisitLog::create(tmp.path()).unwrap();

        log.record("https://example.com/a").unwrap();
        log.record("https://example.com/b").unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["https://example.com/a", "https://example.com/b"]);
    }

    #[test]
    fn test_filename_is_timestamped() {
        let tmp = TempDir::new().unwrap();
        let log = VisitLog::create(tmp.path()).unwrap();
        let name = log.path().file_name().unwrap().to_string_lossy();
        assert!(name.ends_with(".txt"));
        assert_eq!(name.len(), "yymmdd_hhmmss.txt".len());
    }
}
