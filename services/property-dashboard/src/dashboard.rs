//! Dashboard HTTP API and frontend host

use std::path::Path;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Query, State};
use axum::http::request::Parts;
use axum::http::Method;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::catalog::Catalog;

/// Header naming the tenant a request is made for
pub const TENANT_HEADER: &str = "x-tenant-id";

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub catalog: Arc<Catalog>,
}

/// Tenant of the current request, or the catalog's default tenant
#[derive(Debug, Clone)]
pub struct Tenant(pub String);

impl FromRequestParts<DashboardState> for Tenant {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &DashboardState,
    ) -> Result<Self, Self::Rejection> {
        let tenant = parts
            .headers
            .get(TENANT_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| state.catalog.default_tenant());
        Ok(Tenant(tenant.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub property_id: String,
}

/// Build the dashboard axum router
pub fn build_router(catalog: Arc<Catalog>, site_root: &Path) -> Router {
    let dashboard_state = DashboardState { catalog };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/dashboard/properties", get(properties_handler))
        .route("/dashboard/summary", get(summary_handler))
        .route("/health", get(health_handler))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(cors)
        .with_state(dashboard_state)
}

async fn index_handler() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Property Management Dashboard</title>
    <script type="module">
        import init, { mount } from '/pkg/property_dashboard_app.js';
        await init();
        mount();
    </script>
</head>
<body></body>
</html>"#,
    )
}

async fn properties_handler(
    State(dashboard): State<DashboardState>,
    Tenant(tenant): Tenant,
) -> impl IntoResponse {
    let properties = dashboard.catalog.properties_for(&tenant);
    tracing::debug!(
        "Serving {} properties for tenant {}",
        properties.len(),
        tenant
    );
    Json(properties)
}

async fn summary_handler(
    State(dashboard): State<DashboardState>,
    Tenant(tenant): Tenant,
    Query(params): Query<SummaryParams>,
) -> crate::Result<impl IntoResponse> {
    let summary = dashboard.catalog.summary(&tenant, &params.property_id)?;
    Ok(Json(summary))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
