//! The flat ledger surface: `/`, `/api/assets` and `/api/summary`.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use asset_tracker_core::{
    ledger::{LedgerAsset, NewLedgerAsset},
    summary::{summarize_ledger, LedgerSummary},
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
struct LedgerListResponse {
    assets: Vec<LedgerAsset>,
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Asset Tracker API" }))
}

async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<LedgerListResponse>> {
    let assets = state.ledger.list()?;
    Ok(Json(LedgerListResponse { assets }))
}

/// Parameters arrive in the query string; a missing or non-numeric value is
/// rejected by the extractor with 400.
async fn create_asset(
    State(state): State<Arc<AppState>>,
    Query(new_asset): Query<NewLedgerAsset>,
) -> ApiResult<Json<LedgerAsset>> {
    let record = state.ledger.create(new_asset).await?;
    Ok(Json(record))
}

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<LedgerSummary>> {
    let records = state.ledger.list()?;
    Ok(Json(summarize_ledger(&records)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/api/assets", get(list_assets).post(create_asset))
        .route("/api/summary", get(get_summary))
}
