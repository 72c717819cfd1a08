//! Assignment rows kept in a JSON file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use seatplan::{AssignmentRow, AssignmentStore, StoreError, StoreOp, TableId};
use tempfile::NamedTempFile;
use tracing::debug;

fn load_error(path: &Path, err: impl std::fmt::Display) -> StoreError {
    StoreError::new(StoreOp::Load, format!("{}: {err}", path.display()))
}

/// File-backed store.
///
/// Rows are read once at open. A transaction works on the in-memory copy
/// and commit replaces the file by writing a sibling temp file and renaming
/// it over the original, so readers see either the old or the new rows.
/// Assumes a single writer per file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    rows: Vec<AssignmentRow>,
    snapshot: Option<Vec<AssignmentRow>>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let rows = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| load_error(&path, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(load_error(&path, e)),
        };
        Ok(Self {
            path,
            rows,
            snapshot: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All rows, including uncommitted ones.
    pub fn rows(&self) -> &[AssignmentRow] {
        &self.rows
    }

    fn require_transaction(&self, op: StoreOp) -> Result<(), StoreError> {
        if self.snapshot.is_none() {
            return Err(StoreError::new(op, "no open transaction"));
        }
        Ok(())
    }

    fn write_file(&self) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.rows)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl AssignmentStore for JsonFileStore {
    fn begin(&mut self) -> Result<(), StoreError> {
        if self.snapshot.is_some() {
            return Err(StoreError::new(StoreOp::Begin, "transaction already open"));
        }
        self.snapshot = Some(self.rows.clone());
        Ok(())
    }

    fn delete_for_tables(&mut self, table_ids: &[TableId]) -> Result<usize, StoreError> {
        self.require_transaction(StoreOp::Delete)?;
        let before = self.rows.len();
        self.rows.retain(|row| !table_ids.contains(&row.table_id));
        Ok(before - self.rows.len())
    }

    fn insert(&mut self, rows: &[AssignmentRow]) -> Result<(), StoreError> {
        self.require_transaction(StoreOp::Insert)?;
        self.rows.extend_from_slice(rows);
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.require_transaction(StoreOp::Commit)?;
        self.write_file().map_err(|e| {
            StoreError::new(StoreOp::Commit, format!("{}: {e}", self.path.display()))
        })?;
        self.snapshot = None;
        debug!(event = "store_written", path = %self.path.display(), rows = self.rows.len() as u64);
        Ok(())
    }

    fn rollback(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.rows = snapshot;
        }
    }

    fn assignments_for_tables(
        &self,
        table_ids: &[TableId],
    ) -> Result<Vec<AssignmentRow>, StoreError> {
        let committed = self.snapshot.as_ref().unwrap_or(&self.rows);
        Ok(committed
            .iter()
            .filter(|row| table_ids.contains(&row.table_id))
            .cloned()
            .collect())
    }
}
