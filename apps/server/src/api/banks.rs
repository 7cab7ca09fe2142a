use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use asset_tracker_core::banks::{Bank, BankUpdate, NewBank};

use crate::{error::ApiResult, main_lib::AppState};

/// Body of a bank creation; the owner comes from the path.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBankRequest {
    bank_name: String,
    #[serde(default)]
    account_name: String,
    #[serde(default)]
    account_id: String,
    notes: Option<String>,
}

async fn list_banks(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Bank>>> {
    state.user_service.get_user(&user_id)?;
    let banks = state.bank_service.list_banks(&user_id)?;
    Ok(Json(banks))
}

async fn create_bank(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBankRequest>,
) -> ApiResult<Json<Bank>> {
    let bank = state
        .bank_service
        .create_bank(NewBank {
            user_id,
            bank_name: body.bank_name,
            account_name: body.account_name,
            account_id: body.account_id,
            notes: body.notes,
        })
        .await?;
    Ok(Json(bank))
}

async fn get_bank(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Bank>> {
    let bank = state.bank_service.get_bank(&id)?;
    Ok(Json(bank))
}

async fn update_bank(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<BankUpdate>,
) -> ApiResult<Json<Bank>> {
    let bank = state.bank_service.update_bank(&id, update).await?;
    Ok(Json(bank))
}

async fn delete_bank(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.bank_service.delete_bank(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{user_id}/banks", get(list_banks).post(create_bank))
        .route(
            "/banks/{id}",
            get(get_bank).put(update_bank).delete(delete_bank),
        )
}
