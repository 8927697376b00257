//! framework-registry - a small, strict CRUD service for JavaScript
//! framework records
//!
//! Records are validated field by field, stored under server-assigned
//! ids, and served over HTTP at `/frameworks`. Every client error comes
//! back as a `400` carrying `{"errors": [{"field", "message"}]}`.

pub mod cli;
pub mod framework;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod store;
