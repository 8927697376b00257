//! # REST API Module
//!
//! HTTP endpoints for framework records: the CRUD service, its axum
//! routes, and the error envelope every rejected request receives.

pub mod errors;
pub mod server;
pub mod service;

pub use errors::{ApiError, ApiResult, ErrorEnvelope, FieldError, Rejection};
pub use server::framework_routes;
pub use service::FrameworkService;
