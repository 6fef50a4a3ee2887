//! One line of the audit log.

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An audit log entry: either an informational line or an error line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub is_error: bool,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self::at(Local::now(), message, false)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::at(Local::now(), message, true)
    }

    pub fn at(timestamp: DateTime<Local>, message: impl Into<String>, is_error: bool) -> Self {
        Self {
            timestamp,
            message: message.into(),
            is_error,
        }
    }

    /// Renders the entry as exactly one line, without a trailing newline.
    ///
    /// Info lines are timestamped; error lines only carry the `ERROR:` tag.
    /// Line breaks inside the message are folded into single spaces.
    pub fn to_line(&self) -> String {
        let message = single_line(&self.message);
        if self.is_error {
            format!("ERROR: {}", message)
        } else {
            format!("{} - {}", self.timestamp.format(TIMESTAMP_FORMAT), message)
        }
    }
}

fn single_line(message: &str) -> String {
    message
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
