//! # Audit Log
//!
//! Append-only text file adapter implementing the `AuditLog` port.
//!
//! The file is opened in append mode for every entry and closed again before
//! `append` returns, whatever the outcome, so no handle outlives a call.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use converter_types::{AuditError, AuditLog, LogEntry};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

pub const DEFAULT_LOG_FILE: &str = "info.txt";

/// Audit log backed by a plain text file, one entry per line.
#[derive(Debug, Clone)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates missing parent directories of the log file.
    pub async fn ensure_parent(&self) -> Result<(), AuditError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).await?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl AuditLog for FileAuditLog {
    async fn append(&self, entry: &LogEntry) -> Result<(), AuditError> {
        let mut line = entry.to_line();
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::trace!(path = %self.path.display(), error = entry.is_error, "audit line appended");
        Ok(())
    }
}

/// Build a file audit log at `path`, creating its directory if needed.
///
/// # Examples
///
/// ```ignore
/// let log = build_audit_log("logs/info.txt").await?;
/// ```
pub async fn build_audit_log(path: impl AsRef<Path>) -> anyhow::Result<FileAuditLog> {
    let log = FileAuditLog::new(path.as_ref());
    log.ensure_parent().await?;
    tracing::debug!(path = %log.path().display(), "audit log ready");
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[tokio::test]
    async fn test_appends_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileAuditLog::new(dir.path().join("info.txt"));

        let ts = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        log.append(&LogEntry::at(ts, "Converted 100 USD to 45025.00 KZT", false))
            .await
            .unwrap();
        log.append(&LogEntry::error("Request failed: connection refused"))
            .await
            .unwrap();

        let contents = tokio::fs::read_to_string(log.path()).await.unwrap();
        assert_eq!(
            contents,
            "2024-05-01 12:00:00 - Converted 100 USD to 45025.00 KZT\n\
             ERROR: Request failed: connection refused\n"
        );
    }

    #[tokio::test]
    async fn test_existing_contents_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.txt");
        tokio::fs::write(&path, "earlier line\n").await.unwrap();

        let log = FileAuditLog::new(&path);
        log.append(&LogEntry::error("boom")).await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents, "earlier line\nERROR: boom\n");
    }

    #[tokio::test]
    async fn test_build_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("2024").join("info.txt");

        let log = build_audit_log(&path).await.unwrap();
        log.append(&LogEntry::error("boom")).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileAuditLog::new(dir.path().join("missing").join("info.txt"));

        let err = log.append(&LogEntry::error("boom")).await.unwrap_err();
        assert!(matches!(err, AuditError::Io(_)));
    }

    #[test]
    fn test_bare_file_name_has_no_parent_to_create() {
        let log = FileAuditLog::new(DEFAULT_LOG_FILE);
        assert_eq!(log.path(), Path::new("info.txt"));
    }
}
