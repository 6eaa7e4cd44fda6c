mod common;

use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use tinylink::api::handlers::{redirect_handler, shorten_handler};

async fn test_server() -> TestServer {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_known_code() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    common::create_test_mapping(&pool, "ab3f9c1", "https://example.com/target").await;

    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/ab3f9c1").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_redirect_unknown_code_not_found() {
    let server = test_server().await;

    let response = server.get("/0000000").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_shorten_then_resolve_round_trip() {
    let server = test_server().await;

    // The stored URL must come back verbatim, including query and casing.
    let original = "https://example.com/Search?q=Rust&page=2";

    let created = server
        .post("/shorten")
        .json(&json!({ "long_url": original }))
        .await
        .json::<serde_json::Value>();
    let code = created["code"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location").to_str().unwrap(), original);
}
