//! # REST API HTTP Routes
//!
//! Axum routes for `/frameworks`.
//!
//! | Method | Path               | Operation |
//! |--------|--------------------|-----------|
//! | GET    | `/frameworks`      | list      |
//! | POST   | `/frameworks`      | create    |
//! | GET    | `/frameworks/:id`  | get       |
//! | POST   | `/frameworks/:id`  | update    |
//! | DELETE | `/frameworks/:id`  | delete    |
//!
//! Bodies are taken as raw bytes; decoding happens in the service so a
//! malformed body maps onto the error envelope instead of axum's default
//! JSON rejection.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::framework::FrameworkRecord;

use super::errors::ApiResult;
use super::service::FrameworkService;

/// Shared state type
type ServiceState = Arc<FrameworkService>;

/// Build the `/frameworks` router
pub fn framework_routes(service: ServiceState) -> Router {
    Router::new()
        .route("/frameworks", get(list_handler).post(create_handler))
        .route(
            "/frameworks/:id",
            get(get_handler).post(update_handler).delete(delete_handler),
        )
        .with_state(service)
}

async fn list_handler(
    State(service): State<ServiceState>,
) -> ApiResult<Json<Vec<FrameworkRecord>>> {
    Ok(Json(service.list()?))
}

async fn get_handler(
    State(service): State<ServiceState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FrameworkRecord>> {
    Ok(Json(service.get(&id)?))
}

async fn create_handler(
    State(service): State<ServiceState>,
    body: Bytes,
) -> ApiResult<Json<FrameworkRecord>> {
    Ok(Json(service.create(&body)?))
}

async fn update_handler(
    State(service): State<ServiceState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<FrameworkRecord>> {
    Ok(Json(service.update(&id, &body)?))
}

async fn delete_handler(
    State(service): State<ServiceState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FrameworkRecord>> {
    Ok(Json(service.delete(&id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::MetricsRegistry;
    use crate::store::InMemoryRecordStore;

    #[test]
    fn test_router_builds() {
        let service = FrameworkService::new(
            Arc::new(InMemoryRecordStore::new()),
            Arc::new(MetricsRegistry::new()),
        );
        let _router = framework_routes(Arc::new(service));
    }
}
