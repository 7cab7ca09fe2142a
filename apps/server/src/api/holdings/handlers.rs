use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use asset_tracker_core::assets::AssetUpdate;

use crate::{error::ApiResult, main_lib::AppState};

use super::dto::{CreateHoldingRequest, HoldingResponse, HoldingsQuery};

pub async fn list_holdings(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(q): Query<HoldingsQuery>,
) -> ApiResult<Json<Vec<HoldingResponse>>> {
    state.user_service.get_user(&user_id)?;
    let assets = state.asset_service.list_assets(&user_id, &q.into())?;
    Ok(Json(assets.into_iter().map(HoldingResponse::from).collect()))
}

pub async fn create_holding(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateHoldingRequest>,
) -> ApiResult<Json<HoldingResponse>> {
    let asset = state
        .asset_service
        .create_asset(body.into_new_asset(user_id))
        .await?;
    Ok(Json(asset.into()))
}

pub async fn get_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HoldingResponse>> {
    let asset = state.asset_service.get_asset(&id)?;
    Ok(Json(asset.into()))
}

pub async fn update_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<AssetUpdate>,
) -> ApiResult<Json<HoldingResponse>> {
    let asset = state.asset_service.update_asset(&id, update).await?;
    Ok(Json(asset.into()))
}

pub async fn delete_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_asset(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
