//! Append-only text stores for generated passwords and validation runs.
//!
//! These are the file-backed collaborators of the core: the generator hands
//! them a [`GeneratedPassword`], the validator a rendered report. Records are
//! only ever appended; nothing here rewrites or truncates a store.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::{FormReport, GeneratedPassword, Result};

/// Default location of the password log.
pub const DEFAULT_PASSWORD_LOG: &str = "data/security_toolkit_log.txt";
/// Default location of the validation report log.
pub const DEFAULT_VALIDATION_LOG: &str = "data/validation_results.txt";

/// Message returned by [`PasswordHistory::load`] before anything was logged.
pub const NO_HISTORY: &str = "No password history yet.";

const RECORD_WIDTH: usize = 80;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn open_for_append(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Log of every minted password with its digest.
///
/// Each record is four lines:
///
/// ```text
/// Timestamp: 2024-05-01 09:30:00
/// Password: <plaintext>
/// Hash: <64 hex chars>
/// --------------------------------------------------------------------------------
/// ```
///
/// The plaintext is written deliberately; this store is the user-facing
/// record of passwords they asked to generate.
#[derive(Debug, Clone)]
pub struct PasswordHistory {
    path: PathBuf,
}

impl Default for PasswordHistory {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_LOG)
    }
}

impl PasswordHistory {
    /// Creates a store backed by `path`. Nothing is touched until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record, creating the file and its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened
    /// or written.
    pub fn append(&self, password: &GeneratedPassword) -> Result<()> {
        let mut file = open_for_append(&self.path)?;

        let record = format!(
            "Timestamp: {}\nPassword: {}\nHash: {}\n{}\n",
            timestamp(),
            password.value().expose_secret(),
            password.hash_hex(),
            "-".repeat(RECORD_WIDTH),
        );
        file.write_all(record.as_bytes())?;

        tracing::info!(
            path = %self.path.display(),
            hash = password.hash_hex(),
            "appended password record"
        );
        Ok(())
    }

    /// Returns the whole log as text.
    ///
    /// Never fails: a missing file yields [`NO_HISTORY`] and any other read
    /// error yields `"Error reading file: <error>"`.
    pub fn load(&self) -> String {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => NO_HISTORY.to_string(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read password history"
                );
                format!("Error reading file: {}", err)
            }
        }
    }
}

/// Log of validation runs, each wrapped in timestamped banners.
///
/// ```text
///
/// ================================================================================
/// Validation Run: 2024-05-01 09:30:00
/// ================================================================================
/// <report text>
/// ================================================================================
/// ```
#[derive(Debug, Clone)]
pub struct ValidationLog {
    path: PathBuf,
}

impl Default for ValidationLog {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDATION_LOG)
    }
}

impl ValidationLog {
    /// Creates a log backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends pre-formatted report text between banners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened
    /// or written.
    pub fn append(&self, report_text: &str) -> Result<()> {
        let mut file = open_for_append(&self.path)?;
        let banner = "=".repeat(RECORD_WIDTH);

        let entry = format!(
            "\n{banner}\nValidation Run: {}\n{banner}\n{report_text}\n{banner}\n",
            timestamp(),
        );
        file.write_all(entry.as_bytes())?;

        tracing::info!(path = %self.path.display(), "appended validation run");
        Ok(())
    }

    /// Renders `report` and appends it.
    pub fn append_report(&self, report: &FormReport) -> Result<()> {
        self.append(&report.to_string())
    }
}
