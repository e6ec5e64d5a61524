use std::sync::Arc;

use crate::{
    dto::{NewTripDto, TripDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use legline::ledger;
use tracing::warn;

pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<TripDto>> {
    let ledger = state.ledger.lock().await;
    Json(ledger.iter().map(TripDto::from).collect())
}

pub async fn append(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewTripDto>,
) -> Result<Response, Response> {
    let mut ledger = state.ledger.lock().await;
    let trip = ledger
        .append(&body.origin, &body.destination)
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(TripDto::from(&trip))).into_response())
}

pub async fn remove(
    Path(index): Path<usize>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, Response> {
    let mut ledger = state.ledger.lock().await;
    let trip = ledger.remove(index).map_err(error_response)?;
    Ok(Json(TripDto::from(&trip)).into_response())
}

pub async fn recompute(State(state): State<Arc<AppState>>) -> Json<Vec<TripDto>> {
    let mut ledger = state.ledger.lock().await;
    ledger.recompute();
    Json(ledger.iter().map(TripDto::from).collect())
}

fn error_response(err: ledger::Error) -> Response {
    warn!("Rejected request: {err}");
    let status = match err {
        ledger::Error::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        ledger::Error::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
    };
    (status, err.to_string()).into_response()
}
