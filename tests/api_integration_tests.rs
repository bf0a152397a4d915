//! End-to-end endpoint tests.
//!
//! Each test drives the full router against a mock catalog origin and
//! checks the JSON coming back over the wire.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mockito::Server;
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;
use trendbase::{api::create_router, AppState, Config};

// == Helpers ==

fn test_app(base_url: &str) -> Router {
    let config = Config {
        base_url: base_url.to_string(),
        request_delay: 0.0,
        user_agents: vec!["test-agent".to_string()],
        rotate_user_agents: false,
        ..Config::default()
    };
    create_router(AppState::from_config(&config).unwrap())
}

fn trending_page(titles: &[&str]) -> String {
    let records: Vec<Value> = titles
        .iter()
        .map(|title| json!({ "title": title, "price": 2.0 }))
        .collect();
    let state = json!({ "Trending Prompts": records });
    format!(
        r#"<html><head><script id="ng-state" type="application/json">{}</script></head><body></body></html>"#,
        state
    )
}

/// Runs one request through a clone of the router and decodes the JSON
/// body, or `Value::Null` when the body is not JSON.
async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// == Trending Lookup ==

#[tokio::test]
async fn test_trending_lookup_returns_listings() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/art-and-illustrations")
        .with_status(200)
        .with_body(trending_page(&["Skyline", "Harbor"]))
        .expect(1)
        .create_async()
        .await;
    let app = test_app(&server.url());

    let (status, body) = send(&app, "GET", "/api/prompts/trending?category=art").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "art");
    assert_eq!(body["cache_status"], "from_cache_or_new");
    assert_eq!(body["prompts"].as_array().unwrap().len(), 2);
    assert_eq!(body["prompts"][0]["description"], "Skyline");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_second_lookup_is_served_from_cache() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/photography")
        .with_status(200)
        .with_body(trending_page(&["Dunes"]))
        .expect(1)
        .create_async()
        .await;
    let app = test_app(&server.url());

    for _ in 0..2 {
        let (status, body) = send(&app, "GET", "/api/prompts/trending?category=photo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cache_status"], "from_cache_or_new");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let app = test_app("http://127.0.0.1:1");

    let (status, body) = send(&app, "GET", "/api/prompts/trending?category=sculpture").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("sculpture"));
}

#[tokio::test]
async fn test_missing_category_is_rejected() {
    let app = test_app("http://127.0.0.1:1");

    let (status, _) = send(&app, "GET", "/api/prompts/trending").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/games-and-3d")
        .with_status(503)
        .create_async()
        .await;
    let app = test_app(&server.url());

    let (status, body) = send(&app, "GET", "/api/prompts/trending?category=games").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("Refresh failed"));
}

#[tokio::test]
async fn test_forced_refresh_defers_when_cache_is_warm() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/logos-and-icons")
        .with_status(200)
        .with_body(trending_page(&["Mark"]))
        .expect(2)
        .create_async()
        .await;
    let app = test_app(&server.url());

    let (status, _) = send(&app, "GET", "/api/prompts/trending?category=logos").await;
    assert_eq!(status, StatusCode::OK);

    // Warm cache: the old value comes back at once and the refetch is queued
    let (status, body) = send(
        &app,
        "GET",
        "/api/prompts/trending?category=logos&force_refresh=true",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cache_status"], "returning_cached_updating_background");

    // The worker performs the second fetch
    tokio::time::sleep(Duration::from_millis(200)).await;
    mock.assert_async().await;
}

#[tokio::test]
async fn test_forced_refresh_fetches_when_cache_is_cold() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/graphics-and-design")
        .with_status(200)
        .with_body(trending_page(&["Grid"]))
        .expect(1)
        .create_async()
        .await;
    let app = test_app(&server.url());

    let (status, body) = send(
        &app,
        "GET",
        "/api/prompts/trending?category=graphics&force_refresh=true",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cache_status"], "refreshed");
    mock.assert_async().await;
}

// == Cache Purge ==

#[tokio::test]
async fn test_clear_cache_rejects_missing_and_wrong_keys() {
    let app = test_app("http://127.0.0.1:1");

    let (status, body) = send(&app, "POST", "/api/prompts/clear-cache").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid API key");

    let (status, _) = send(&app, "POST", "/api/prompts/clear-cache?api_key=wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_clear_cache_forces_the_next_lookup_to_fetch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/marketing-and-business")
        .with_status(200)
        .with_body(trending_page(&["Funnel"]))
        .expect(2)
        .create_async()
        .await;
    let app = test_app(&server.url());

    let (status, _) = send(&app, "GET", "/api/prompts/trending?category=marketing").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/api/prompts/clear-cache?api_key=your-secret-api-key",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("cleared"));

    // With the cache emptied the lookup goes back to the origin
    let (status, _) = send(&app, "GET", "/api/prompts/trending?category=marketing").await;
    assert_eq!(status, StatusCode::OK);

    mock.assert_async().await;
}

// == Stats and Health ==

#[tokio::test]
async fn test_stats_count_the_served_traffic() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/art-and-illustrations")
        .with_status(200)
        .with_body(trending_page(&["One"]))
        .create_async()
        .await;
    let app = test_app(&server.url());

    // First call misses and fetches, the second is a cache hit
    for _ in 0..2 {
        let (status, _) = send(&app, "GET", "/api/prompts/trending?category=art").await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "GET", "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hits"], 1);
    assert_eq!(body["misses"], 1);
    assert_eq!(body["total_entries"], 1);
    assert!(body.get("hit_rate").is_some());
}

#[tokio::test]
async fn test_health_reports_status_and_timestamp() {
    let app = test_app("http://127.0.0.1:1");

    let (status, body) = send(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body.get("timestamp").is_some());
}

// == Index ==

#[tokio::test]
async fn test_root_lists_the_endpoints() {
    let app = test_app("http://127.0.0.1:1");

    let (status, body) = send(&app, "GET", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["endpoints"].get("trending_prompts").is_some());
    assert!(body["endpoints"].get("clear_cache").is_some());
}
