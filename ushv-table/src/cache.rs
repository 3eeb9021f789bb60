//! Process-lifetime cache of loaded survey files.

use crate::RespondentTable;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use ushv_survey::error::Result;

/// Loads each survey file at most once.
///
/// Single-threaded: the map lives behind a `RefCell`, and cached tables are
/// handed out as `Rc`-backed clones of the same rows.
#[derive(Debug, Default)]
pub struct DatasetCache {
    tables: RefCell<HashMap<PathBuf, RespondentTable>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table for `path`, reading the file only on the first call.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<RespondentTable> {
        let path = path.as_ref();
        if let Some(table) = self.tables.borrow().get(path) {
            log::debug!("[USHV Debug] cache: hit for {}", path.display());
            return Ok(table.clone());
        }

        let table = RespondentTable::from_path(path)?;
        self.tables
            .borrow_mut()
            .insert(path.to_path_buf(), table.clone());
        Ok(table)
    }

    pub fn is_cached(&self, path: impl AsRef<Path>) -> bool {
        self.tables.borrow().contains_key(path.as_ref())
    }
}
