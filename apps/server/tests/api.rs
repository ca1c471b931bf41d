use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use tradeshift_server::{api::app_router, build_state, config::Config};

async fn build_test_router() -> (Router, TempDir) {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        jwt_secret: "integration-test-secret".to_string(),
        token_ttl_hours: 1,
        cors_origin: None,
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register(app: &Router, name: &str, username: &str, email: &str, role: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "name": name,
            "username": username,
            "email": email,
            "password": "secret123",
            "contactNo": "5551234",
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let (app, _tmp) = build_test_router().await;
    let (status, body) = send(&app, Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let (app, _tmp) = build_test_router().await;
    for uri in ["/api/accounts", "/api/portfolios", "/api/trades", "/api/dashboard"] {
        let (status, _) = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri} should require auth");
    }
}

#[tokio::test]
async fn registration_provisions_account_and_portfolio() {
    let (app, _tmp) = build_test_router().await;
    let token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (status, accounts) = send(&app, Method::GET, "/api/accounts", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(accounts.as_array().unwrap().len(), 1);
    assert_eq!(accounts[0]["balance"], json!(10000.0));
    assert_eq!(accounts[0]["status"], "ACTIVE");

    let (status, portfolios) =
        send(&app, Method::GET, "/api/portfolios", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(portfolios.as_array().unwrap().len(), 1);
    assert_eq!(portfolios[0]["name"], "Main Portfolio");
    assert_eq!(portfolios[0]["assets"], json!([]));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let (app, _tmp) = build_test_router().await;
    register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Other Jane",
            "username": "jane2",
            "email": "jane@example.com",
            "password": "secret123",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn login_round_trip_and_wrong_password() {
    let (app, _tmp) = build_test_router().await;
    register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "jane@example.com", "password": "secret123", "role": "USER" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["username"], "jane");
    assert!(body["user"].get("passwordHash").is_none());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "jane@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn buy_order_fills_and_debits_the_account() {
    let (app, _tmp) = build_test_router().await;
    let token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (status, order) = send(
        &app,
        Method::POST,
        "/api/trades",
        Some(&token),
        Some(json!({
            "symbol": "aapl",
            "quantity": 10,
            "price": 150.50,
            "side": "BUY",
            "orderType": "LIMIT",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "order failed: {order}");
    assert_eq!(order["symbol"], "AAPL");
    assert_eq!(order["status"], "FILLED");
    assert!(order["filledAt"].as_str().is_some());

    let (_, accounts) = send(&app, Method::GET, "/api/accounts", Some(&token), None).await;
    assert_eq!(accounts[0]["balance"], json!(8495.0));

    let (status, history) = send(&app, Method::GET, "/api/trades", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn insufficient_funds_rejects_and_stores_nothing() {
    let (app, _tmp) = build_test_router().await;
    let token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/trades",
        Some(&token),
        Some(json!({
            "symbol": "AAPL",
            "quantity": 1000,
            "price": 150.50,
            "side": "BUY",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Insufficient funds"));

    let (_, history) = send(&app, Method::GET, "/api/trades", Some(&token), None).await;
    assert_eq!(history, json!([]));
    let (_, accounts) = send(&app, Method::GET, "/api/accounts", Some(&token), None).await;
    assert_eq!(accounts[0]["balance"], json!(10000.0));
}

#[tokio::test]
async fn foreign_orders_are_invisible() {
    let (app, _tmp) = build_test_router().await;
    let jane = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;
    let john = register(&app, "John Roe", "john", "john@example.com", "USER").await;

    let (_, order) = send(
        &app,
        Method::POST,
        "/api/trades",
        Some(&jane),
        Some(json!({ "symbol": "MSFT", "quantity": 1, "price": 100, "side": "BUY" })),
    )
    .await;
    let order_id = order["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/trades/{order_id}"),
        Some(&john),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/trades/{order_id}"),
        Some(&jane),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn filled_orders_cannot_be_cancelled() {
    let (app, _tmp) = build_test_router().await;
    let token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (_, order) = send(
        &app,
        Method::POST,
        "/api/trades",
        Some(&token),
        Some(json!({ "symbol": "AAPL", "quantity": 1, "price": 100, "side": "BUY" })),
    )
    .await;
    let order_id = order["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/trades/{order_id}/cancel"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Only PENDING orders"));
}

#[tokio::test]
async fn portfolio_summary_applies_the_markup() {
    let (app, _tmp) = build_test_router().await;
    let token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (_, portfolios) = send(&app, Method::GET, "/api/portfolios", Some(&token), None).await;
    let portfolio_id = portfolios[0]["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/portfolios/{portfolio_id}/assets"),
        Some(&token),
        Some(json!({ "symbol": "AAPL", "quantity": 10, "avgPrice": 150.50 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, summary) = send(
        &app,
        Method::GET,
        &format!("/api/portfolios/{portfolio_id}/summary"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalCost"], json!(1505.0));
    assert_eq!(summary["totalValue"], json!(1580.25));
    assert_eq!(summary["totalGainLoss"], json!(75.25));
    assert_eq!(summary["gainLossPercent"], json!(5.0));
}

#[tokio::test]
async fn portfolios_are_scoped_to_their_owner() {
    let (app, _tmp) = build_test_router().await;
    let jane = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;
    let john = register(&app, "John Roe", "john", "john@example.com", "USER").await;

    let (_, portfolios) = send(&app, Method::GET, "/api/portfolios", Some(&jane), None).await;
    let portfolio_id = portfolios[0]["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/portfolios/{portfolio_id}"),
        Some(&john),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn known_symbols_quote_their_table_price() {
    let (app, _tmp) = build_test_router().await;
    let token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (status, quote) = send(
        &app,
        Method::GET,
        "/api/market/price/AAPL",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["symbol"], "AAPL");
    assert_eq!(quote["price"], json!(185.42));
}

#[tokio::test]
async fn unknown_symbols_quote_deterministically() {
    let (app, _tmp) = build_test_router().await;
    let token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (_, first) = send(&app, Method::GET, "/api/market/price/ZZZZ", Some(&token), None).await;
    let (_, second) = send(&app, Method::GET, "/api/market/price/zzzz", Some(&token), None).await;
    assert_eq!(first["price"], second["price"]);
}

#[tokio::test]
async fn watchlist_round_trip() {
    let (app, _tmp) = build_test_router().await;
    let token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (status, item) = send(
        &app,
        Method::POST,
        "/api/watchlist",
        Some(&token),
        Some(json!({ "symbol": "tsla" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["symbol"], "TSLA");
    assert_eq!(item["name"], "Tesla Inc.");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/watchlist",
        Some(&token),
        Some(json!({ "symbol": "TSLA" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, items) = send(&app, Method::GET, "/api/watchlist", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items[0]["price"], json!(245.67));

    let item_id = items[0]["id"].as_str().unwrap();
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/watchlist/{item_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, items) = send(&app, Method::GET, "/api/watchlist", Some(&token), None).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn dashboard_reflects_trading_activity() {
    let (app, _tmp) = build_test_router().await;
    let token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;

    let (_, portfolios) = send(&app, Method::GET, "/api/portfolios", Some(&token), None).await;
    let portfolio_id = portfolios[0]["id"].as_str().unwrap();
    send(
        &app,
        Method::POST,
        &format!("/api/portfolios/{portfolio_id}/assets"),
        Some(&token),
        Some(json!({ "symbol": "AAPL", "quantity": 10, "avgPrice": 150.50 })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/api/trades",
        Some(&token),
        Some(json!({ "symbol": "AAPL", "quantity": 1, "price": 100, "side": "BUY" })),
    )
    .await;

    let (status, dashboard) = send(&app, Method::GET, "/api/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["totalPortfolioValue"], json!(1580.25));
    assert_eq!(dashboard["totalGainLoss"], json!(75.25));
    assert_eq!(dashboard["cashBalance"], json!(9900.0));
    assert_eq!(dashboard["recentOrders"].as_array().unwrap().len(), 1);
    assert_eq!(dashboard["topAssets"][0]["symbol"], "AAPL");
}

#[tokio::test]
async fn user_management_is_admin_only() {
    let (app, _tmp) = build_test_router().await;
    let user_token = register(&app, "Jane Doe", "jane", "jane@example.com", "USER").await;
    let admin_token = register(&app, "Ada Admin", "ada", "ada@example.com", "ADMIN").await;

    let (status, _) = send(&app, Method::GET, "/api/users", Some(&user_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, users) = send(&app, Method::GET, "/api/users", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().unwrap().len(), 2);

    let jane_id = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "jane")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/users/{jane_id}"),
        Some(&admin_token),
        Some(json!({ "name": "Jane D." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Jane D.");
    assert_eq!(updated["email"], "jane@example.com");

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/users/{jane_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/users/{jane_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
