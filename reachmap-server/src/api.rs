//! HTTP surface
//!
//! - `GET /health`
//! - `POST /reachable` processes an upstream response sent in the body
//! - `GET /mock` answers from the built-in sample data

use std::sync::Arc;
use std::time::Duration;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use geojson::FeatureCollection;
use reachmap_core::prelude::*;
use serde::{Deserialize, Serialize};
use tower::{ServiceBuilder, limit::GlobalConcurrencyLimitLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn build_router(state: Arc<AppState>, timeout: Duration, concurrency_limit: usize) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/reachable", post(reachable))
        .route("/mock", get(mock));

    with_limits(routes, timeout, concurrency_limit)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Request timeout plus one concurrency budget shared by every route.
/// `Router::layer` clones the stack per route, so the semaphore must be global.
fn with_limits<S>(router: Router<S>, timeout: Duration, concurrency_limit: usize) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .timeout(timeout)
            .layer(GlobalConcurrencyLimitLayer::new(concurrency_limit)),
    )
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(ErrorResponse { error: self.1 })).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        let status = match &e {
            Error::InvalidData(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self(status, e.to_string())
    }
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError(StatusCode::REQUEST_TIMEOUT, "request timed out".to_string())
    } else {
        ApiError(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct ReachableRequest {
    /// `[lat, lon]` of the query origin, drawn on the map when present
    pub origin: Option<[f64; 2]>,
    pub max_travel_time: Option<Minutes>,
    pub max_transfers: Option<u32>,
    pub response: UpstreamResponse,
}

#[derive(Debug, Deserialize)]
pub struct MockParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub time: Option<Minutes>,
    pub transfers: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct TieredNode {
    #[serde(flatten)]
    pub node: Node,
    pub tier: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct ReachableResponse {
    pub nodes: Vec<TieredNode>,
    pub rejected: usize,
    pub summary: AreaSummary,
    pub area_method: BoundaryMethod,
    pub area_wkt: Option<String>,
    pub map: FeatureCollection,
}

impl ReachableResponse {
    fn new(area: ReachableArea, buckets: &DurationBuckets) -> Result<Self, Error> {
        let map = reachmap_core::export::map_feature_collection(
            &area.nodes,
            &area.boundary,
            buckets,
            area.origin,
        )?;
        let summary = area.summary();
        let area_method = area.boundary.method();
        let area_wkt = area.boundary.to_wkt_string();

        let nodes = area
            .nodes
            .into_iter()
            .map(|node| {
                let tier = buckets.tier_for(node.travel_time).clone();
                TieredNode {
                    node,
                    tier: tier.label,
                    color: tier.color,
                }
            })
            .collect();

        Ok(Self {
            nodes,
            rejected: area.rejected,
            summary,
            area_method,
            area_wkt,
            map,
        })
    }
}

fn origin_from(lat: f64, lon: f64) -> Result<Coordinate, ApiError> {
    Coordinate::new(lat, lon).ok_or_else(|| {
        ApiError(
            StatusCode::BAD_REQUEST,
            format!("({lat}, {lon}) is not a valid WGS84 coordinate"),
        )
    })
}

async fn reachable(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReachableRequest>,
) -> Result<Json<ReachableResponse>, ApiError> {
    let origin = req
        .origin
        .map(|[lat, lon]| origin_from(lat, lon))
        .transpose()?;
    let bounds = FilterBounds::new(req.max_travel_time, req.max_transfers);

    let area = assemble_area(&req.response, &state.classifier, &bounds, origin);
    tracing::debug!(nodes = area.nodes.len(), "processed upstream response");

    Ok(Json(ReachableResponse::new(area, &state.buckets)?))
}

async fn mock(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MockParams>,
) -> Result<Json<ReachableResponse>, ApiError> {
    let defaults = &state.defaults;
    let origin = origin_from(
        params.lat.unwrap_or(defaults.latitude),
        params.lon.unwrap_or(defaults.longitude),
    )?;
    let time_limit = params.time.unwrap_or(defaults.time_limit);
    let max_transfers = params.transfers.unwrap_or(defaults.max_transfers);

    let area = mock_area(origin, time_limit, Some(max_transfers));
    Ok(Json(ReachableResponse::new(area, &state.buckets)?))
}
