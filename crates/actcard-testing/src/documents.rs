//! Remote-data JSON documents for CLI tests.
//!
//! CLI commands read a settled fetch from disk; this module writes those
//! files into a temp directory that lives as long as the test.

use std::path::{Path, PathBuf};

use actcard_types::{Activity, ActivityDocument, FetchError};
use anyhow::Result;
use tempfile::TempDir;

/// Temp directory holding activity documents.
pub struct DocumentDir {
    dir: TempDir,
}

impl DocumentDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write raw JSON under `name` and return the full path.
    pub fn write(&self, name: &str, json: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, json)?;
        Ok(path)
    }

    /// Write a successful fetch of `activity`.
    pub fn write_success(&self, name: &str, activity: &Activity) -> Result<PathBuf> {
        let document = ActivityDocument::Success {
            activity: Box::new(activity.clone()),
        };
        self.write(name, &serde_json::to_string_pretty(&document)?)
    }

    /// Write a fetch that is still in flight.
    pub fn write_pending(&self, name: &str) -> Result<PathBuf> {
        self.write(name, &serde_json::to_string_pretty(&ActivityDocument::Pending)?)
    }

    /// Write a failed fetch.
    pub fn write_failure(
        &self,
        name: &str,
        message: &str,
        status_code: Option<u16>,
    ) -> Result<PathBuf> {
        let error = match status_code {
            Some(code) => FetchError::with_status(message, code),
            None => FetchError::new(message),
        };
        let document = ActivityDocument::Failure { error };
        self.write(name, &serde_json::to_string_pretty(&document)?)
    }
}
