//! CSV loading for the respondent table.
//!
//! The survey file has a header row; columns are looked up by name, so
//! their order does not matter and extra columns are ignored. A missing
//! required column, an unreadable file or a malformed row aborts the load.
//!
//! Paths ending in `.gz` are decompressed on the fly.

use crate::RespondentTable;
use flate2::read::GzDecoder;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use ushv_survey::error::Result;
use ushv_survey::respondent::ColumnIndex;

impl RespondentTable {
    /// Parse a survey CSV held in memory.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Parse a survey CSV from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut rows = Vec::new();
        let mut uncoded_states = BTreeSet::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let respondent = columns.parse(&record, i as u64 + 1)?;
            if respondent.state_code.is_none() {
                uncoded_states.insert(respondent.state.clone());
            }
            rows.push(respondent);
        }

        log::info!("[USHV Debug] loader: Loaded {} respondents", rows.len());
        if !uncoded_states.is_empty() {
            log::warn!(
                "[USHV Debug] loader: No state code for {:?}; those rows have no map location",
                uncoded_states
            );
        }
        Ok(Self::new(rows))
    }

    /// Read the survey file at `path`, gunzipping it when the extension is `.gz`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("[USHV Debug] loader: Reading {}", path.display());
        let file = BufReader::new(File::open(path)?);
        let is_gzipped = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);
        if is_gzipped {
            Self::from_reader(GzDecoder::new(file))
        } else {
            Self::from_reader(file)
        }
    }
}
