//! JSON file-backed record store.
//!
//! The whole table lives in memory and is rewritten to disk after every
//! mutation. Writes go to a sibling `.tmp` file first and are renamed
//! over the data file, so a crash mid-write leaves the previous contents
//! intact.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::framework::FrameworkRecord;

use super::errors::{StoreError, StoreResult};
use super::table::RecordTable;
use super::RecordStore;

/// Record store persisted as a single JSON document.
#[derive(Debug)]
pub struct FileRecordStore {
    path: PathBuf,
    table: Mutex<RecordTable>,
}

impl FileRecordStore {
    /// Open the store at `path`.
    ///
    /// A missing or empty file opens as an empty store; the file is
    /// created on the first write.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let table = Self::load_table(&path)?;
        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_table(path: &Path) -> StoreResult<RecordTable> {
        if !path.exists() {
            return Ok(RecordTable::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(RecordTable::default());
        }

        let table: RecordTable = serde_json::from_str(&content)?;
        Ok(table.normalized())
    }

    fn save_table(&self, table: &RecordTable) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(table)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, RecordTable>> {
        self.table.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Apply `change` to a copy of the table, persist it, then publish it.
    ///
    /// A failed change leaves both the file and the table untouched.
    fn mutate<T>(
        &self,
        change: impl FnOnce(&mut RecordTable) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut table = self.lock()?;
        let mut next = table.clone();
        let out = change(&mut next)?;
        self.save_table(&next)?;
        *table = next;
        Ok(out)
    }
}

impl RecordStore for FileRecordStore {
    fn find_all(&self) -> StoreResult<Vec<FrameworkRecord>> {
        Ok(self.lock()?.all())
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Option<FrameworkRecord>> {
        Ok(self.lock()?.get(id))
    }

    fn exists_by_id(&self, id: i64) -> StoreResult<bool> {
        Ok(self.lock()?.contains(id))
    }

    fn save(&self, record: FrameworkRecord) -> StoreResult<FrameworkRecord> {
        self.mutate(|table| table.save(record))
    }

    fn delete(&self, record: &FrameworkRecord) -> StoreResult<()> {
        self.mutate(|table| {
            table.remove(record.id);
            Ok(())
        })
    }

    fn delete_all(&self) -> StoreResult<()> {
        self.mutate(|table| {
            table.clear();
            Ok(())
        })
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }
}
