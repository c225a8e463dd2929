//! CSV file storage.
//!
//! The CSV file is the source of truth for uploaded match data. Header names
//! are matched after trimming and lower-casing; cells are trimmed.

use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{MatchStore, StorageError};
use crate::models::{MatchRecord, REQUIRED_COLUMNS};

/// Parse a match table, rejecting tables that lack a required column.
///
/// Input with no header row at all is an empty table.
pub fn parse_matches<R: Read>(input: R) -> Result<Vec<MatchRecord>, StorageError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let headers: StringRecord = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Ok(Vec::new());
    }

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(StorageError::MissingColumn(missing.to_string()));
    }

    reader.set_headers(headers);

    let mut records = Vec::new();
    for row in reader.deserialize::<MatchRecord>() {
        records.push(row?);
    }
    Ok(records)
}

/// Write a match table with the canonical header row.
pub fn write_matches<W: Write>(output: W, records: &[MatchRecord]) -> Result<(), StorageError> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(REQUIRED_COLUMNS)?;

    for r in records {
        writer.write_record([
            r.match_id.clone(),
            r.date.clone(),
            r.map.clone(),
            r.mode.clone(),
            r.kills.to_string(),
            r.deaths.to_string(),
            r.assists.to_string(),
            r.score.to_string(),
            r.accuracy.to_string(),
            r.impact.to_string(),
            r.duration_min.to_string(),
            r.mvp_label().to_string(),
            r.result.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Match store backed by a CSV file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl MatchStore for CsvStore {
    fn load(&self) -> Result<Vec<MatchRecord>, StorageError> {
        if !self.path.exists() {
            debug!("No data file at {:?}, serving empty table", self.path);
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let records = parse_matches(BufReader::new(file))?;

        debug!("Read {} matches from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn replace(&self, records: &[MatchRecord]) -> Result<(), StorageError> {
        let dir = self.dir();
        fs::create_dir_all(dir)?;

        // Stage next to the target so the rename stays on one filesystem.
        let mut staged = NamedTempFile::new_in(dir)?;
        write_matches(&mut staged, records)?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| e.error)?;

        info!("Wrote {} matches to {:?}", records.len(), self.path);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
