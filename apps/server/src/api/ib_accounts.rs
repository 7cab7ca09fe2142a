use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use asset_tracker_core::ib_accounts::{
    IbAccount, IbAccountUpdate, ImportLog, NewIbAccount, NewImportLog,
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateIbAccountRequest {
    account_id: String,
    #[serde(default)]
    account_name: String,
}

#[derive(Deserialize)]
struct ImportLogsQuery {
    limit: Option<i64>,
}

async fn list_ib_accounts(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<IbAccount>>> {
    state.user_service.get_user(&user_id)?;
    let accounts = state.ib_account_service.list_ib_accounts(&user_id)?;
    Ok(Json(accounts))
}

async fn create_ib_account(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateIbAccountRequest>,
) -> ApiResult<Json<IbAccount>> {
    let account = state
        .ib_account_service
        .create_ib_account(NewIbAccount {
            user_id,
            account_id: body.account_id,
            account_name: body.account_name,
        })
        .await?;
    Ok(Json(account))
}

async fn get_ib_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<IbAccount>> {
    let account = state.ib_account_service.get_ib_account(&id)?;
    Ok(Json(account))
}

async fn update_ib_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<IbAccountUpdate>,
) -> ApiResult<Json<IbAccount>> {
    let account = state.ib_account_service.update_ib_account(&id, update).await?;
    Ok(Json(account))
}

async fn delete_ib_account(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.ib_account_service.delete_ib_account(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_imports(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImportLogsQuery>,
) -> ApiResult<Json<Vec<ImportLog>>> {
    state.ib_account_service.get_ib_account(&id)?;
    let logs = state.ib_account_service.list_import_logs(&id, query.limit)?;
    Ok(Json(logs))
}

async fn record_import(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(log): Json<NewImportLog>,
) -> ApiResult<Json<ImportLog>> {
    let recorded = state.ib_account_service.record_import(&id, log).await?;
    Ok(Json(recorded))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{user_id}/ib-accounts",
            get(list_ib_accounts).post(create_ib_account),
        )
        .route(
            "/ib-accounts/{id}",
            get(get_ib_account)
                .put(update_ib_account)
                .delete(delete_ib_account),
        )
        .route(
            "/ib-accounts/{id}/imports",
            get(list_imports).post(record_import),
        )
}
