pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod models;

use axum::body::Bytes;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: AppConfig,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    /// Rendered once at startup; see `api::dashboard::render_dashboard`.
    pub dashboard_page: Bytes,
}

impl AppState {
    pub fn new(
        db: sqlx::PgPool,
        config: AppConfig,
        metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        let dashboard_page = Bytes::from(api::dashboard::render_dashboard(&config));
        Self {
            db,
            config,
            metrics_handle,
            dashboard_page,
        }
    }
}
