use crate::error;
use crate::AlertSink;
use anyhow::Result;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use vitalwatch_common::types::Alert;

/// Appends one line per alert to a text file.
///
/// Lines read `Patient ID: <id>, Timestamp: <ms>, Condition: <text>`.
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Opens (or creates) `path` for appending, creating missing parent
    /// directories first.
    pub fn open(path: impl AsRef<Path>) -> error::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlertSink for FileSink {
    fn publish(&self, alert: &Alert) -> Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(
            file,
            "Patient ID: {}, Timestamp: {}, Condition: {}",
            alert.patient_id, alert.timestamp, alert.condition
        )
        .map_err(error::NotifyError::from)?;
        Ok(())
    }

    fn sink_name(&self) -> &str {
        "file"
    }
}
