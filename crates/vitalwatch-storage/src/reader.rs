use crate::engine::InMemoryRecordStore;
use crate::error::{Result, StorageError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use vitalwatch_common::types::{RecordKind, Sample};

const COL_PATIENT_ID: &str = "patientId";
const COL_VALUE: &str = "measurementValue";
const COL_KIND: &str = "recordType";
const COL_TIMESTAMP: &str = "timestamp";

/// Column positions resolved from a CSV header line.
#[derive(Debug, Clone, Copy)]
struct Columns {
    patient_id: usize,
    value: usize,
    kind: usize,
    timestamp: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let find = |name: &'static str| {
            names
                .iter()
                .position(|h| *h == name)
                .ok_or(StorageError::MissingColumn(name))
        };
        Ok(Self {
            patient_id: find(COL_PATIENT_ID)?,
            value: find(COL_VALUE)?,
            kind: find(COL_KIND)?,
            timestamp: find(COL_TIMESTAMP)?,
        })
    }

    fn parse_row(&self, line_no: usize, line: &str) -> Result<Sample> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let field = |idx: usize, name: &str| {
            fields.get(idx).copied().ok_or_else(|| StorageError::InvalidRow {
                line: line_no,
                reason: format!("missing field '{name}'"),
            })
        };
        let invalid = |name: &str, raw: &str| StorageError::InvalidRow {
            line: line_no,
            reason: format!("invalid {name} '{raw}'"),
        };

        let raw_id = field(self.patient_id, COL_PATIENT_ID)?;
        let patient_id = raw_id.parse::<u32>().map_err(|_| invalid(COL_PATIENT_ID, raw_id))?;
        let raw_value = field(self.value, COL_VALUE)?;
        let value = raw_value.parse::<f64>().map_err(|_| invalid(COL_VALUE, raw_value))?;
        let kind = RecordKind::from(field(self.kind, COL_KIND)?.to_string());
        let raw_ts = field(self.timestamp, COL_TIMESTAMP)?;
        let timestamp = raw_ts.parse::<i64>().map_err(|_| invalid(COL_TIMESTAMP, raw_ts))?;

        Ok(Sample::new(patient_id, value, kind, timestamp))
    }
}

/// Loads samples from a CSV file into `store`.
///
/// The first line is a header naming the `patientId`, `measurementValue`,
/// `recordType` and `timestamp` columns in any order. Blank lines are
/// skipped. Returns the number of samples added.
///
/// # Errors
///
/// Fails if the path is missing or not a file, if a required column is
/// absent, or if any row cannot be parsed. Rows before the failing one
/// have already been added to the store.
pub fn load_csv(path: &Path, store: &InMemoryRecordStore) -> Result<usize> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let meta = std::fs::metadata(path).map_err(io_err)?;
    if !meta.is_file() {
        return Err(StorageError::NotAFile(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path).map_err(io_err)?);
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line.map_err(io_err)?,
        None => return Ok(0),
    };
    let columns = Columns::from_header(&header)?;

    let mut loaded = 0;
    for (idx, line) in lines.enumerate() {
        let line = line.map_err(io_err)?;
        if line.trim().is_empty() {
            continue;
        }
        // header is line 1
        let sample = columns.parse_row(idx + 2, &line)?;
        store.insert(sample);
        loaded += 1;
    }

    tracing::info!(path = %path.display(), samples = loaded, "Loaded patient records");
    Ok(loaded)
}
