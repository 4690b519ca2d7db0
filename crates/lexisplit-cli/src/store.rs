// Submitted-input log
//
// Every saved submission is one JSON object per line:
//   {"text": "...", "analyzed": [<tree>, ...], "timestamp": "<RFC 3339>"}
// The file is append-only; reading parses every non-blank line.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lexisplit_core::tree::DecompositionTree;
use serde::{Deserialize, Serialize};

/// Error type for input-log operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("input log I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode record: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored line could not be parsed. `line` is 1-based.
    #[error("malformed record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Submissions must contain some non-whitespace text.
    #[error("no text provided")]
    EmptyText,
}

/// One saved submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub text: String,
    pub analyzed: Vec<DecompositionTree>,
    pub timestamp: DateTime<Utc>,
}

/// Append-only JSON-lines log of submitted texts and their analyses.
#[derive(Debug, Clone)]
pub struct InputLog {
    path: PathBuf,
}

impl InputLog {
    /// Open the log at `path`, creating its directory and an empty file if
    /// either is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a submission stamped with the current time.
    ///
    /// The text is stored as given; it is only rejected when blank.
    pub fn append(
        &self,
        text: &str,
        analyzed: Vec<DecompositionTree>,
    ) -> Result<InputRecord, StoreError> {
        self.append_at(text, analyzed, Utc::now())
    }

    /// Append a submission with an explicit timestamp.
    pub fn append_at(
        &self,
        text: &str,
        analyzed: Vec<DecompositionTree>,
        timestamp: DateTime<Utc>,
    ) -> Result<InputRecord, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyText);
        }
        let record = InputRecord {
            text: text.to_string(),
            analyzed,
            timestamp,
        };

        let mut line = serde_json::to_string(&record)?;
        line.push('\n');
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;

        tracing::debug!(
            path = %self.path.display(),
            trees = record.analyzed.len(),
            "saved input"
        );
        Ok(record)
    }

    /// Read every saved record, oldest first.
    pub fn read_all(&self) -> Result<Vec<InputRecord>, StoreError> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line)
                .map_err(|source| StoreError::Malformed { line: idx + 1, source })?;
            records.push(record);
        }
        Ok(records)
    }
}
