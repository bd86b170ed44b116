//! vitals-api
//!
//! HTTP surface for the coaching dashboard: member listing and per-member
//! dashboards over a live sheet, plus the schema registry for inspection.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::http::Method;
use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use config::AllowedOrigins;
use state::AppState;

pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let cors = match origins {
        AllowedOrigins::Any => CorsLayer::new().allow_origin(Any),
        AllowedOrigins::List(list) => CorsLayer::new().allow_origin(list.clone()),
    };

    cors.allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn build_app(state: AppState, origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        // Schema registry (static data)
        .route("/schemas", get(routes::schemas::list_schemas))
        .route("/schemas/{id}", get(routes::schemas::get_schema_detail))
        // Sheet-backed
        .route("/members", get(routes::members::list_members))
        .route("/dashboard/{identifier}", get(routes::dashboard::get_dashboard))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors_layer(origins))
        .with_state(state)
}
