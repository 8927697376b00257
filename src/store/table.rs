//! The record table shared by both store backends.

use serde::{Deserialize, Serialize};

use crate::framework::FrameworkRecord;

use super::errors::{StoreError, StoreResult};

fn first_id() -> Option<i64> {
    Some(1)
}

/// Records in insertion order plus the id counter.
///
/// This is also the on-disk layout of [`super::FileRecordStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct RecordTable {
    /// Greater than every id ever saved. `None` once `i64::MAX` is taken.
    #[serde(default = "first_id")]
    next_id: Option<i64>,
    #[serde(default)]
    records: Vec<FrameworkRecord>,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            records: Vec::new(),
        }
    }
}

impl RecordTable {
    /// Raise the counter past every stored id (files may be edited by hand).
    pub(super) fn normalized(mut self) -> Self {
        if let Some(max) = self.records.iter().filter_map(|r| r.id).max() {
            self.reserve(max);
        }
        self
    }

    fn reserve(&mut self, id: i64) {
        self.next_id = match (self.next_id, id.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }

    pub(super) fn all(&self) -> Vec<FrameworkRecord> {
        self.records.clone()
    }

    pub(super) fn get(&self, id: i64) -> Option<FrameworkRecord> {
        self.records.iter().find(|r| r.id == Some(id)).cloned()
    }

    pub(super) fn contains(&self, id: i64) -> bool {
        self.records.iter().any(|r| r.id == Some(id))
    }

    /// Upsert `record`, assigning a fresh id when it has none.
    ///
    /// Fails with [`StoreError::IdsExhausted`] instead of handing out an
    /// id that could already be taken.
    pub(super) fn save(&mut self, mut record: FrameworkRecord) -> StoreResult<FrameworkRecord> {
        let id = match record.id {
            Some(id) => id,
            None => {
                let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
                record.id = Some(id);
                id
            }
        };
        self.reserve(id);

        // Update or insert
        if let Some(idx) = self.records.iter().position(|r| r.id == Some(id)) {
            self.records[idx] = record.clone();
        } else {
            self.records.push(record.clone());
        }
        Ok(record)
    }

    /// Returns whether a record was removed.
    pub(super) fn remove(&mut self, id: Option<i64>) -> bool {
        let Some(id) = id else {
            return false;
        };
        let len_before = self.records.len();
        self.records.retain(|r| r.id != Some(id));
        self.records.len() != len_before
    }

    pub(super) fn clear(&mut self) {
        self.records.clear();
    }

    pub(super) fn len(&self) -> usize {
        self.records.len()
    }
}
