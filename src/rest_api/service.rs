//! # Framework Service
//!
//! The five CRUD operations behind `/frameworks`.
//!
//! Every operation is a single synchronous pass against the record store.
//! Path ids and request bodies arrive raw so the checks run in a fixed
//! order: id syntax, id existence, body syntax, field validation.

use std::sync::Arc;

use tracing::{error, info};

use crate::framework::{validate, FrameworkRecord};
use crate::observability::{Event, MetricsRegistry};
use crate::store::RecordStore;

use super::errors::{ApiError, ApiResult};

/// Parse a path id as a signed integer.
pub fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::not_a_number())
}

/// Decode a request body into a candidate record.
pub fn parse_payload(body: &[u8]) -> ApiResult<FrameworkRecord> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

fn check(record: &FrameworkRecord) -> ApiResult<()> {
    validate(record).map_err(ApiError::Validation)
}

/// CRUD operations over a [`RecordStore`]
pub struct FrameworkService {
    store: Arc<dyn RecordStore>,
    metrics: Arc<MetricsRegistry>,
}

impl FrameworkService {
    pub fn new(store: Arc<dyn RecordStore>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// All records in store order
    pub fn list(&self) -> ApiResult<Vec<FrameworkRecord>> {
        let result = self.store.find_all().map_err(ApiError::from);
        if result.is_ok() {
            self.metrics.increment_lists();
        }
        self.observe("list", result)
    }

    /// One record by path id
    pub fn get(&self, raw_id: &str) -> ApiResult<FrameworkRecord> {
        let result = self.find(raw_id);
        if result.is_ok() {
            self.metrics.increment_lookups();
        }
        self.observe("get", result)
    }

    /// Validate and insert a new record.
    ///
    /// Returns the persisted record, including its assigned id.
    pub fn create(&self, body: &[u8]) -> ApiResult<FrameworkRecord> {
        let result = self.try_create(body);
        if let Ok(record) = &result {
            self.metrics.increment_creates();
            info!(event = %Event::FrameworkCreated, id = ?record.id, name = %record.name, "framework created");
        }
        self.observe("create", result)
    }

    /// Overwrite every mutable field of an existing record.
    pub fn update(&self, raw_id: &str, body: &[u8]) -> ApiResult<FrameworkRecord> {
        let result = self.try_update(raw_id, body);
        if let Ok(record) = &result {
            self.metrics.increment_updates();
            info!(event = %Event::FrameworkUpdated, id = ?record.id, name = %record.name, "framework updated");
        }
        self.observe("update", result)
    }

    /// Remove a record and return its last stored values.
    pub fn delete(&self, raw_id: &str) -> ApiResult<FrameworkRecord> {
        let result = self.try_delete(raw_id);
        if let Ok(record) = &result {
            self.metrics.increment_deletes();
            info!(event = %Event::FrameworkDeleted, id = ?record.id, name = %record.name, "framework deleted");
        }
        self.observe("delete", result)
    }

    fn find(&self, raw_id: &str) -> ApiResult<FrameworkRecord> {
        let id = parse_id(raw_id)?;
        self.store.find_by_id(id)?.ok_or_else(ApiError::not_found)
    }

    fn try_create(&self, body: &[u8]) -> ApiResult<FrameworkRecord> {
        let candidate = parse_payload(body)?;
        check(&candidate)?;

        if let Some(id) = candidate.id {
            if self.store.exists_by_id(id)? {
                return Err(ApiError::already_exists());
            }
        }

        Ok(self.store.save(candidate)?)
    }

    fn try_update(&self, raw_id: &str, body: &[u8]) -> ApiResult<FrameworkRecord> {
        let mut stored = self.find(raw_id)?;
        let incoming = parse_payload(body)?;
        check(&incoming)?;

        stored.apply(incoming);
        Ok(self.store.save(stored)?)
    }

    fn try_delete(&self, raw_id: &str) -> ApiResult<FrameworkRecord> {
        let stored = self.find(raw_id)?;
        self.store.delete(&stored)?;
        Ok(stored)
    }

    fn observe<T>(&self, operation: &'static str, result: ApiResult<T>) -> ApiResult<T> {
        match &result {
            Err(ApiError::Store(e)) => {
                error!(event = %Event::StoreFailed, operation, error = %e, "record store failed");
            }
            Err(e) => {
                self.metrics.increment_rejected();
                if matches!(e, ApiError::Validation(_)) {
                    self.metrics.increment_validation_failures();
                }
                info!(event = %Event::RequestRejected, operation, reason = %e, "request rejected");
            }
            Ok(_) => {}
        }
        result
    }
}
