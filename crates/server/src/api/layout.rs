use std::sync::Arc;

use crate::state::AppState;
use axum::{Json, extract::State};
use legline::layout::Layout;

pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    let ledger = state.ledger.lock().await;
    Json(Layout::build(ledger.trips(), &state.layout))
}
