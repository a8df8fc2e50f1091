//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::domain::CarrierId;
use crate::engine::{Planner, RouteFilter, RouteTypeFilter, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ports", get(list_ports))
        .route("/api/carriers", get(list_carriers))
        .route("/api/routes/search", get(search_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Port catalog for search-form consumers.
async fn list_ports(State(state): State<AppState>) -> Json<PortListResponse> {
    let mut ports: Vec<PortDto> = state.network.ports().map(PortDto::from_port).collect();
    ports.sort_by(|a, b| a.name.cmp(&b.name));

    Json(PortListResponse { ports })
}

/// Carrier catalog for the filter UI.
async fn list_carriers(State(state): State<AppState>) -> Json<CarrierListResponse> {
    let carriers = state
        .network
        .carriers()
        .iter()
        .map(CarrierDto::from_carrier)
        .collect();

    Json(CarrierListResponse { carriers })
}

/// Search for routes between two ports.
///
/// The origin/destination precondition (distinct, resolvable ports) is
/// enforced here before the engine runs.
async fn search_routes(
    State(state): State<AppState>,
    Query(params): Query<RouteSearchParams>,
) -> Result<Json<RouteSearchResponse>, AppError> {
    let origin = state
        .network
        .resolve_port(&params.origin)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown origin port: {}", params.origin),
        })?;
    let destination = state
        .network
        .resolve_port(&params.destination)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown destination port: {}", params.destination),
        })?;

    if origin.id == destination.id {
        return Err(AppError::BadRequest {
            message: "origin and destination must differ".to_string(),
        });
    }

    let filter = parse_filter(&params)?;

    let planner = Planner::new(&state.config);
    let report = planner
        .search(&origin.id, &destination.id, &state.network)
        .map_err(AppError::from)?;

    let routes = filter
        .apply(&report.routes)
        .iter()
        .map(RouteDto::from_route)
        .collect();

    Ok(Json(RouteSearchResponse { routes }))
}

/// Build the post-query filter from request parameters.
fn parse_filter(params: &RouteSearchParams) -> Result<RouteFilter, AppError> {
    let route_type = match params.route_type.as_deref() {
        None | Some("ALL") => RouteTypeFilter::All,
        Some("DIRECT") => RouteTypeFilter::Direct,
        Some("TRANSSHIPMENT") => RouteTypeFilter::Transshipment,
        Some(other) => {
            return Err(AppError::BadRequest {
                message: format!("unknown route type: {other}"),
            });
        }
    };

    let carriers = params
        .carriers
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(CarrierId::new)
        .collect();

    Ok(RouteFilter {
        route_type,
        max_transit_days: params.max_days,
        carriers,
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
