use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
    routing::post,
};
use serde_json::{Value, json};

use recipe_scout::{
    config::{GeminiConfig, ImageApiConfig},
    error::AppError,
    generation::{FalImageClient, GeminiClient, ImageGenerator, RecipeGenerator, TextGenerator},
};

const FALLBACK: &str = "https://cdn.test/fallback.jpg";

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    addr
}

async fn gemini_stub(
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    assert!(params.iter().all(|(k, _)| k != "key"), "api key leaked into the URL");
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("secret") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"})));
    }
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");

    let recipes = r#"[{"title": "Miso Soup", "ingredients": ["miso", "tofu", "wakame"], "instructions": ["Heat dashi", "Whisk in miso"], "duration": "15 min."},"#;
    let tail = r#" {"title": "Broken Toast", "ingredients": ["bread"], "instructions": ["Toast"], "duration": "5 min."}]"#;
    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": recipes }, { "text": tail }] }
            }]
        })),
    )
}

async fn fal_stub(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    if headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some("Key fal-key") {
        return (StatusCode::UNAUTHORIZED, "missing key").into_response();
    }
    let prompt = body["prompt"].as_str().unwrap_or_default();
    if prompt.contains("Broken") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "overloaded").into_response();
    }
    if prompt.contains("Garbage") {
        return (StatusCode::OK, "not json").into_response();
    }
    Json(json!({
        "images": [
            { "url": "https://fal.test/first.jpg", "content_type": "image/jpeg" },
            { "url": "https://fal.test/second.jpg", "content_type": "image/jpeg" }
        ]
    }))
    .into_response()
}

fn gemini(addr: SocketAddr, key: &str) -> GeminiClient {
    let config = GeminiConfig {
        api_key: key.to_string(),
        model: "test-model".to_string(),
        base_url: format!("http://{addr}/"),
    };
    GeminiClient::new(&config, reqwest::Client::new())
}

fn fal(base_url: String) -> FalImageClient {
    let config = ImageApiConfig {
        base_url,
        api_key: "fal-key".to_string(),
        fallback_url: FALLBACK.to_string(),
    };
    FalImageClient::new(&config, reqwest::Client::new())
}

async fn gemini_server() -> SocketAddr {
    serve(Router::new().route("/models/test-model:generateContent", post(gemini_stub))).await
}

async fn fal_server() -> SocketAddr {
    serve(Router::new().route("/", post(fal_stub))).await
}

#[tokio::test]
async fn gemini_joins_text_parts() {
    let addr = gemini_server().await;

    let text = gemini(addr, "secret")
        .generate_text("soup".to_string())
        .await
        .unwrap()
        .unwrap();

    assert!(text.starts_with("[{\"title\": \"Miso Soup\""));
    assert!(text.ends_with("}]"));
}

#[tokio::test]
async fn gemini_rejection_is_an_upstream_error() {
    let addr = gemini_server().await;

    let result = gemini(addr, "wrong").generate_text("soup".to_string()).await;

    assert!(matches!(result, Err(AppError::Upstream(_))));
}

#[tokio::test]
async fn gemini_transport_errors_do_not_reveal_the_key() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed = listener.local_addr().unwrap();
    drop(listener);

    let err = gemini(closed, "SUPERSECRET")
        .generate_text("soup".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
    assert!(!err.to_string().contains("SUPERSECRET"), "{err}");
}

#[tokio::test]
async fn fal_returns_first_image_url() {
    let addr = fal_server().await;

    let url = fal(format!("http://{addr}/"))
        .generate_image("Pesto".to_string(), vec!["basil".to_string()])
        .await;

    assert_eq!(url, "https://fal.test/first.jpg");
}

#[tokio::test]
async fn fal_error_status_uses_fallback() {
    let addr = fal_server().await;

    let url = fal(format!("http://{addr}/"))
        .generate_image("Broken Toast".to_string(), Vec::new())
        .await;

    assert_eq!(url, FALLBACK);
}

#[tokio::test]
async fn fal_bad_body_or_no_server_yields_empty_url() {
    let addr = fal_server().await;

    let garbage = fal(format!("http://{addr}/"))
        .generate_image("Garbage".to_string(), Vec::new())
        .await;
    assert_eq!(garbage, "");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed = listener.local_addr().unwrap();
    drop(listener);
    let unreachable = fal(format!("http://{closed}/"))
        .generate_image("Pesto".to_string(), Vec::new())
        .await;
    assert_eq!(unreachable, "");
}

#[tokio::test]
async fn generator_pairs_each_recipe_with_its_image() {
    let generator = RecipeGenerator::new(
        gemini(gemini_server().await, "secret"),
        fal(format!("http://{}/", fal_server().await)),
    );

    let recipes = generator.generate("japanese breakfast").await;

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].title, "Miso Soup");
    assert_eq!(recipes[0].image_url, "https://fal.test/first.jpg");
    assert_eq!(recipes[0].ingredients, ["miso", "tofu", "wakame"]);
    assert_eq!(recipes[1].title, "Broken Toast");
    assert_eq!(recipes[1].image_url, FALLBACK);
    assert_ne!(recipes[0].id, recipes[1].id);
}

#[tokio::test]
async fn generator_swallows_text_failures() {
    let generator = RecipeGenerator::new(
        gemini(gemini_server().await, "wrong"),
        fal(format!("http://{}/", fal_server().await)),
    );

    assert!(generator.generate("soup").await.is_empty());
}
