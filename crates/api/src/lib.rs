//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The payroll report routes (bundle and single-file download)
//! - Health check
//! - JSON error responses

pub mod error;
pub mod routes;

use axum::Router;
use paysheet_core::reports::PayrollReportService;
use paysheet_core::source::PayslipSource;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Payslip data source queried per request.
    pub source: Arc<dyn PayslipSource>,
    /// Report generation service.
    pub service: Arc<PayrollReportService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
