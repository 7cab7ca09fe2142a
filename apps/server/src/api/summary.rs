use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use asset_tracker_core::summary::PortfolioSummary;

use crate::{error::ApiResult, main_lib::AppState};

async fn get_portfolio_summary(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state
        .portfolio_summary_service
        .get_portfolio_summary(&user_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users/{user_id}/summary", get(get_portfolio_summary))
}
