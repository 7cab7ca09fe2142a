mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use asset_tracker_server::config::LedgerBackend;
use common::{send, test_router};

async fn create_user(app: &axum::Router, name: &str) -> Value {
    let (status, user) = send(
        app,
        Method::POST,
        "/api/v1/users",
        Some(json!({
            "username": name,
            "email": format!("{}@Example.com", name),
            "password": "correct horse"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    user
}

#[tokio::test]
async fn user_lifecycle_hides_password_hash() {
    let (_tmp, app) = test_router(LedgerBackend::Memory).await;
    let user = create_user(&app, "alice").await;
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "alice@example.com");
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password").is_none());

    let id = user["id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], user["id"]);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/users",
        Some(json!({ "username": "alice", "email": "x@example.com", "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, Method::GET, &format!("/api/v1/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn holdings_carry_valuation_and_summary_groups_by_type() {
    let (_tmp, app) = test_router(LedgerBackend::Memory).await;
    let user = create_user(&app, "alice").await;
    let user_id = user["id"].as_str().unwrap();

    let (status, bank) = send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{}/banks", user_id),
        Some(json!({ "bankName": "CTBC", "accountName": "Securities", "accountId": "123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let bank_id = bank["id"].as_str().unwrap();

    let (status, stock) = send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{}/holdings", user_id),
        Some(json!({
            "bankId": bank_id,
            "symbol": "2330",
            "name": "TSMC",
            "assetType": "stock",
            "source": "bank",
            "quantity": 10,
            "currentPrice": 15,
            "costBasis": 100
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stock["currency"], "TWD");
    assert_eq!(stock["marketValue"].as_f64(), Some(150.0));
    assert_eq!(stock["unrealizedPnl"].as_f64(), Some(50.0));

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{}/holdings", user_id),
        Some(json!({
            "symbol": "0050",
            "assetType": "etf",
            "source": "manual",
            "quantity": 2,
            "currentPrice": 50
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, at_bank) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{}/holdings?bankId={}", user_id, bank_id),
        None,
    )
    .await;
    assert_eq!(at_bank.as_array().unwrap().len(), 1);

    let (status, summary) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{}/summary", user_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["count"], 2);
    assert_eq!(summary["totalMarketValue"].as_f64(), Some(250.0));
    assert_eq!(summary["byType"]["stock"].as_f64(), Some(150.0));
    assert_eq!(summary["byType"]["etf"].as_f64(), Some(100.0));
    assert_eq!(summary["bySource"]["bank"].as_f64(), Some(150.0));

    // Deleting the bank takes its holdings with it.
    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/banks/{}", bank_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, remaining) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{}/holdings", user_id),
        None,
    )
    .await;
    let symbols: Vec<&str> = remaining
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["0050"]);
}

#[tokio::test]
async fn holding_linked_to_another_users_account_is_conflict() {
    let (_tmp, app) = test_router(LedgerBackend::Memory).await;
    let alice = create_user(&app, "alice").await;
    let bob = create_user(&app, "bob").await;

    let (_, account) = send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{}/ib-accounts", bob["id"].as_str().unwrap()),
        Some(json!({ "accountId": "U1234567", "accountName": "Bob IB" })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{}/holdings", alice["id"].as_str().unwrap()),
        Some(json!({
            "ibAccountId": account["id"],
            "symbol": "AAPL",
            "assetType": "stock",
            "source": "ib",
            "quantity": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);
}

#[tokio::test]
async fn import_logs_track_last_import_date() {
    let (_tmp, app) = test_router(LedgerBackend::Memory).await;
    let user = create_user(&app, "carol").await;
    let (_, account) = send(
        &app,
        Method::POST,
        &format!("/api/v1/users/{}/ib-accounts", user["id"].as_str().unwrap()),
        Some(json!({ "accountId": "U7777777" })),
    )
    .await;
    let account_id = account["id"].as_str().unwrap();
    let imports_uri = format!("/api/v1/ib-accounts/{}/imports", account_id);

    let (status, _) = send(
        &app,
        Method::POST,
        &imports_uri,
        Some(json!({
            "importDate": "2024-03-01T09:00:00",
            "status": "success",
            "fileName": "march.csv",
            "rowsImported": 12
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        &imports_uri,
        Some(json!({
            "importDate": "2024-04-01T09:00:00",
            "status": "failed",
            "fileName": "april.csv",
            "rowsImported": 0,
            "errorMessage": "unexpected header"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, reloaded) = send(
        &app,
        Method::GET,
        &format!("/api/v1/ib-accounts/{}", account_id),
        None,
    )
    .await;
    assert_eq!(reloaded["lastImportDate"], "2024-03-01T09:00:00");

    let (_, logs) = send(&app, Method::GET, &imports_uri, None).await;
    let files: Vec<&str> = logs
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["fileName"].as_str().unwrap())
        .collect();
    assert_eq!(files, vec!["april.csv", "march.csv"]);

    let (status, _) = send(
        &app,
        Method::POST,
        &imports_uri,
        Some(json!({ "status": "bogus", "fileName": "x.csv", "rowsImported": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn holding_with_out_of_range_valuation_is_rejected() {
    let (_tmp, app) = test_router(LedgerBackend::Memory).await;
    let user = create_user(&app, "dave").await;
    let user_id = user["id"].as_str().unwrap();
    let holdings_uri = format!("/api/v1/users/{}/holdings", user_id);

    let (status, body) = send(
        &app,
        Method::POST,
        &holdings_uri,
        Some(json!({
            "symbol": "BIG",
            "assetType": "stock",
            "source": "manual",
            "quantity": 1e20,
            "currentPrice": 1e10
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, listed) = send(&app, Method::GET, &holdings_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let (status, summary) = send(
        &app,
        Method::GET,
        &format!("/api/v1/users/{}/summary", user_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["count"], 0);
}
