mod dto;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{user_id}/holdings",
            get(handlers::list_holdings).post(handlers::create_holding),
        )
        .route(
            "/holdings/{id}",
            get(handlers::get_holding)
                .put(handlers::update_holding)
                .delete(handlers::delete_holding),
        )
}
