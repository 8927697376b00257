//! In-memory record store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::framework::FrameworkRecord;

use super::errors::{StoreError, StoreResult};
use super::table::RecordTable;
use super::RecordStore;

/// Process-local record store. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    table: RwLock<RecordTable>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, RecordTable>> {
        self.table.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, RecordTable>> {
        self.table.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn find_all(&self) -> StoreResult<Vec<FrameworkRecord>> {
        Ok(self.read()?.all())
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Option<FrameworkRecord>> {
        Ok(self.read()?.get(id))
    }

    fn exists_by_id(&self, id: i64) -> StoreResult<bool> {
        Ok(self.read()?.contains(id))
    }

    fn save(&self, record: FrameworkRecord) -> StoreResult<FrameworkRecord> {
        self.write()?.save(record)
    }

    fn delete(&self, record: &FrameworkRecord) -> StoreResult<()> {
        self.write()?.remove(record.id);
        Ok(())
    }

    fn delete_all(&self) -> StoreResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}
