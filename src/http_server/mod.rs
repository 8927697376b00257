//! # HTTP Server Module
//!
//! Combines the framework routes and the observability routes into one
//! Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/frameworks`, `/frameworks/:id` - Framework records
//! - `/observability/*` - Health and metrics

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::{HttpServerConfig, ListenerConfigError};
pub use server::HttpServer;
