// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Append-only debug log of successful activity updates.
//!
//! The file is opened in append mode for each record and closed right away.
//! It is never truncated or rotated here.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Separator written after every record.
pub const RECORD_SEPARATOR: &str =
    "==================================================";

/// One update call as it went over the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    pub activity_id: u64,
    /// Update payload exactly as sent
    pub payload: String,
    pub status: u16,
    /// Raw response body
    pub response_body: String,
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Activity ID: {}", self.activity_id)?;
        writeln!(f, "Update Data Sent: {}", self.payload)?;
        writeln!(f, "Response Status: {}", self.status)?;
        writeln!(f, "Response Text: {}", self.response_body)?;
        writeln!(f, "{}", RECORD_SEPARATOR)
    }
}

/// Sink for update records.
pub trait AuditLog: Send + Sync {
    fn append_record(&self, record: &AuditRecord) -> std::io::Result<()>;
}

/// Plain-text audit log file.
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
}

impl AuditLog for FileAuditLog {
    fn append_record(&self, record: &AuditRecord) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.to_string().as_bytes())?;
        file.flush()
    }
}
