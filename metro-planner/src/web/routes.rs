//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};

use crate::network::NetworkError;
use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// Hard cap on routes per alternatives request.
const MAX_ROUTES_LIMIT: usize = 10;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lines", get(list_lines))
        .route("/stations/:name", get(station_info))
        .route("/route/plan", post(plan_route))
        .route("/route/alternatives", post(plan_alternatives))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every line with its stations.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let network = &state.network;
    let lines = network
        .lines()
        .iter()
        .map(|line| LineResult::from_line(network, line))
        .collect();

    Json(LinesResponse { lines })
}

/// Lines and neighbours of one station.
async fn station_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationResponse>, AppError> {
    let network = &state.network;
    let id = network.resolve(&name)?;

    let line_ids = network.line_ids_at(id);
    let lines = line_ids
        .iter()
        .map(|line| network.line_name(*line).to_string())
        .collect();
    let neighbors = network
        .neighbors_of(id)
        .iter()
        .map(NeighborResult::from_neighbor)
        .collect();

    Ok(Json(StationResponse {
        name: network.station_name(id).to_string(),
        lines,
        transfer_hub: line_ids.len() >= 2,
        neighbors,
    }))
}

/// Plan a route between two stations.
async fn plan_route(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid plan request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let result = state.planner().search(&req.origin, &req.destination)?;

    info!(
        origin = %req.origin,
        destination = %req.destination,
        edges = result.route.edge_count(),
        transfers = result.route.transfer_count(),
        states_expanded = result.states_expanded,
        "Planned route"
    );

    Ok(Json(RouteResponse::from_route(&result.route)).into_response())
}

/// Several distinct routes between two stations, best first.
async fn plan_alternatives(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AlternativesResponse>, AppError> {
    let req: AlternativesRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid alternatives request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let max_routes = req
        .max_routes
        .unwrap_or(state.config.max_alternatives)
        .min(MAX_ROUTES_LIMIT);
    let results = state
        .planner()
        .alternatives(&req.origin, &req.destination, max_routes)?;

    info!(
        origin = %req.origin,
        destination = %req.destination,
        max_routes,
        found = results.len(),
        "Planned alternatives"
    );

    let routes = results
        .iter()
        .map(|result| RankedRouteResponse {
            cost: result.cost,
            route: RouteResponse::from_route(&result.route),
        })
        .collect();

    Ok(Json(AlternativesResponse { routes }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::UnknownStation(_) | NetworkError::UnknownLine(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            PlanError::NoRoute { .. } => AppError::Unprocessable {
                message: e.to_string(),
            },
            PlanError::InvalidRoute(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            warn!(%status, %message, "Request failed");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
