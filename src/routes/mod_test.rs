use super::*;
use crate::state::test_helpers::{player_body, test_app_state};
use serde_json::Value;

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_app(cors_origins: &[String]) -> String {
    let router = app(test_app_state(), cors_origins);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn welcome_page_is_server_rendered_html() {
    let base = spawn_app(&[]).await;
    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let html = response.text().await.unwrap();
    assert!(html.contains("Welcome to Basketball Player Ranking"));
    assert!(html.contains("Your platform for analyzing and ranking basketball players"));
}

#[tokio::test]
async fn health_endpoints_respond() {
    let base = spawn_app(&[]).await;

    let body: Value = reqwest::get(format!("{base}/api/health")).await.unwrap().json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "Basketball Player Ranking API is running");

    let response = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_json_not_found() {
    let base = spawn_app(&[]).await;
    let response = reqwest::get(format!("{base}/no/such/page")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Resource not found"}));
}

#[tokio::test]
async fn wrong_method_on_known_path_is_json_method_not_allowed() {
    let base = spawn_app(&[]).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/players/{}", uuid::Uuid::new_v4()))
        .json(&player_body("LeBron James", "Lakers", "SF"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn undecodable_query_string_is_json_bad_request() {
    let base = spawn_app(&[]).await;
    let response = reqwest::get(format!("{base}/api/players?page=1&page=2")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("application/json"), "{content_type}");
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("page"), "{body}");
}

#[tokio::test]
async fn malformed_json_body_is_no_data() {
    let base = spawn_app(&[]).await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/players"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "No data provided"}));
}

#[tokio::test]
async fn player_crud_flow() {
    let base = spawn_app(&[]).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/players"))
        .json(&player_body("LeBron James", "Lakers", "SF"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["overall_score"], 86.5);
    assert_eq!(created["weighted_score"], 86.0);
    let id = created["id"].as_str().unwrap().to_owned();

    let fetched: Value = client.get(format!("{base}/api/players/{id}")).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched, created);

    let listing: Value = client
        .get(format!("{base}/api/players?position=SF&sort_by=weighted_score&order=desc"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["page"], 1);
    assert_eq!(listing["per_page"], 20);
    assert_eq!(listing["pages"], 1);
    assert_eq!(listing["players"][0]["id"], id.as_str());

    let response = client
        .patch(format!("{base}/api/players/{id}"))
        .json(&json!({"team": "Cavaliers"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let patched: Value = response.json().await.unwrap();
    assert_eq!(patched["team"], "Cavaliers");
    assert_eq!(patched["created_at"], created["created_at"]);

    let response = client
        .put(format!("{base}/api/players/{id}"))
        .json(&json!({"name": "Updated Name"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation error");

    let response = client.delete(format!("{base}/api/players/{id}")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let response = client.get(format!("{base}/api/players/{id}")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Player not found"}));
}

#[tokio::test]
async fn invalid_id_and_query_are_bad_requests() {
    let base = spawn_app(&[]).await;

    let response = reqwest::get(format!("{base}/api/players/invalid-id")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Invalid player ID format"}));

    let response = reqwest::get(format!("{base}/api/players?per_page=500")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("per_page"));
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let base = spawn_app(&[]).await;
    let response = reqwest::Client::new()
        .get(format!("{base}/api/health"))
        .header("origin", "http://example.test")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn cors_echoes_only_listed_origins() {
    let base = spawn_app(&["http://localhost:3000".to_owned(), "bad\norigin".to_owned()]).await;
    let client = reqwest::Client::new();

    let allowed = client
        .get(format!("{base}/api/health"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(allowed.headers()["access-control-allow-origin"], "http://localhost:3000");

    let denied = client
        .get(format!("{base}/api/health"))
        .header("origin", "http://evil.test")
        .send()
        .await
        .unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}
