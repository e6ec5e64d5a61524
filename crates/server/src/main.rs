mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::{delete, get, post};
use legline::ledger::{Change, Ledger};
use std::sync::Arc;
use tracing::{error, info};

const PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let port = match std::env::args().nth(1) {
        Some(value) => match value.parse() {
            Ok(port) => port,
            Err(err) => {
                error!("Invalid port {value}: {err}");
                std::process::exit(1);
            }
        },
        None => PORT,
    };

    let mut ledger = Ledger::with_sample();
    ledger.subscribe(|change, trips| match change {
        Change::Appended { index } => info!("Trip appended at {index}, {} trips", trips.len()),
        Change::Removed { index } => info!("Trip removed at {index}, {} trips", trips.len()),
        Change::Recomputed => info!("Recomputed {} trips", trips.len()),
    });
    info!("Seeded ledger with {} trips", ledger.len());
    let state = Arc::new(AppState::new(ledger));

    let app = axum::Router::new()
        .route("/trips", get(api::list).post(api::append))
        .route("/trips/recompute", post(api::recompute))
        .route("/trips/{index}", delete(api::remove))
        .route("/layout", get(api::layout))
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {port}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {port}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
