//! HTTP server mode for REST API access to the listing and href helpers

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::href::{get_id_from_href, get_uuid_from_href, remove_version_from_href};
use crate::pagination::{get_pagination_params, limited_by_marker, limited_with_max, Identified};
use crate::types::{QueryParams, QueryString};

/// A collection member served by the item endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Item {
    id: u64,
    href: String,
}

impl Identified for Item {
    fn id(&self) -> u64 {
        self.id
    }
}

/// App state shared across handlers
struct AppState {
    config: ApiConfig,
    items: Vec<Item>,
}

impl AppState {
    fn new(config: ApiConfig) -> Self {
        let base = config.base_url.trim_end_matches('/');
        let items = (0..config.collection_size)
            .map(|id| Item {
                id,
                href: format!("{base}/v1.1/items/{id}"),
            })
            .collect();
        Self { config, items }
    }
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router with all routes and layers
pub fn router(config: ApiConfig) -> Router {
    let state = AppState::new(config);

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/items", get(list_items))
        .route("/items/paged", get(list_items_by_marker))
        .route("/pagination", get(pagination_params))
        .route("/href/version", get(strip_version))
        .route("/href/id", get(href_id))
        .route("/href/uuid", get(href_uuid))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ApiConfig) -> Result<()> {
    let addr = config.server.addr()?;
    let app = router(config);

    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Turn a helper result into a JSON envelope, mapping client errors to 400
fn respond<T: Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::success(data))).into_response(),
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            tracing::warn!(status = status.as_u16(), "Rejected request: {e}");
            (status, Json(ApiResponse::<()>::error(e.to_string()))).into_response()
        }
    }
}

fn parse_query(raw: Option<String>) -> QueryString {
    raw.as_deref().map(QueryString::parse).unwrap_or_default()
}

/// Fetch the required `href` parameter
fn href_param(query: &QueryString) -> Result<&str> {
    query
        .query_param("href")
        .ok_or_else(|| Error::invalid_param("href", "", "parameter is required"))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List items with offset/limit pagination
async fn list_items(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> Response {
    let query = parse_query(raw);
    respond(limited_with_max(&state.items, &query, state.config.max_limit))
}

/// List items with marker/limit pagination
async fn list_items_by_marker(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let query = parse_query(raw);
    respond(limited_by_marker(&state.items, &query, state.config.max_limit))
}

/// Echo validated marker/limit parameters
async fn pagination_params(RawQuery(raw): RawQuery) -> Response {
    respond(get_pagination_params(&parse_query(raw)))
}

/// Strip the version segment from `href`
async fn strip_version(RawQuery(raw): RawQuery) -> Response {
    let query = parse_query(raw);
    respond(href_param(&query).and_then(|href| {
        remove_version_from_href(href).map(|stripped| json!({ "href": stripped }))
    }))
}

/// Read the trailing integer id of `href`
async fn href_id(RawQuery(raw): RawQuery) -> Response {
    let query = parse_query(raw);
    respond(href_param(&query).and_then(|href| get_id_from_href(href).map(|id| json!({ "id": id }))))
}

/// Read the trailing token of `href`
async fn href_uuid(RawQuery(raw): RawQuery) -> Response {
    let query = parse_query(raw);
    respond(
        href_param(&query)
            .and_then(|href| get_uuid_from_href(href).map(|uuid| json!({ "uuid": uuid }))),
    )
}
