use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::{error::ApiResult, main_lib::AppState};

/// Reports ok once the database answers a trivial query.
async fn healthz(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    asset_tracker_storage_sqlite::ping(&state.pool)?;
    Ok(Json(json!({ "status": "ok" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/healthz", get(healthz))
}
