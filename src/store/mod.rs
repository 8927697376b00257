//! # Record Store
//!
//! Persistence for framework records, keyed by a store-assigned id.
//!
//! The service layer only sees the [`RecordStore`] trait. Two backends
//! implement it:
//! - [`InMemoryRecordStore`]: process-local table, used by tests and when
//!   no data file is configured
//! - [`FileRecordStore`]: the same table persisted as a JSON document
//!
//! # Id assignment
//!
//! Ids start at 1. The next id handed out is always greater than every
//! id ever saved, including ids supplied by callers, so a generated id
//! never collides with an existing record.

mod errors;
mod file;
mod memory;
mod table;

pub use errors::{StoreError, StoreResult};
pub use file::FileRecordStore;
pub use memory::InMemoryRecordStore;

use crate::framework::FrameworkRecord;

/// Storage operations for framework records.
pub trait RecordStore: Send + Sync {
    /// All records, in insertion order
    fn find_all(&self) -> StoreResult<Vec<FrameworkRecord>>;

    /// The record with the given id, if stored
    fn find_by_id(&self, id: i64) -> StoreResult<Option<FrameworkRecord>>;

    /// Whether a record with the given id is stored
    fn exists_by_id(&self, id: i64) -> StoreResult<bool>;

    /// Insert or overwrite a record.
    ///
    /// A record without an id is inserted under a fresh id. A record whose
    /// id is not stored yet is inserted under that id. Otherwise the
    /// stored record with the same id is replaced in place.
    ///
    /// Returns the record exactly as persisted.
    fn save(&self, record: FrameworkRecord) -> StoreResult<FrameworkRecord>;

    /// Remove the record with `record.id`. Unknown ids are ignored.
    fn delete(&self, record: &FrameworkRecord) -> StoreResult<()>;

    /// Remove every record
    fn delete_all(&self) -> StoreResult<()>;

    /// Number of stored records
    fn count(&self) -> StoreResult<usize>;
}
