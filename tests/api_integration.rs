mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use newsbrief::api::dtos::ErrorResponse;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = helpers::test_app(helpers::StubFetcher::failing());

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["status"], "OK");
}

#[tokio::test]
async fn test_summarize_clean_article() {
    let fetcher = helpers::StubFetcher::page(helpers::article_html(&helpers::CLEAN_ARTICLE));
    let app = helpers::test_app(fetcher.clone());

    let response = app
        .oneshot(post_json(
            "/v1/summarize",
            json!({ "url": "https://example.com/tin-tuc/duong-ven-song", "percent": 50 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["url"], "https://example.com/tin-tuc/duong-ven-song");
    assert_eq!(body["title"], "Bài viết mẫu - Báo Mẫu");
    assert_eq!(body["siteName"], "Báo Mẫu");
    assert_eq!(body["language"], "vi");
    assert_eq!(body["needsTranslation"], false);
    assert_eq!(body["percentage"], 50);
    assert_eq!(body["cached"], false);
    assert_eq!(body["stats"]["originalParagraphCount"], 5);
    assert!(body["stats"]["summarizedParagraphCount"].as_u64().unwrap() <= 5);
    assert!(!body["bullets"].as_array().unwrap().is_empty());
    assert!(!body["summary"].as_str().unwrap().contains("Trang chủ"));
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn test_summarize_is_cached_per_percent() {
    let fetcher = helpers::StubFetcher::page(helpers::article_html(&helpers::CLEAN_ARTICLE));
    let app = helpers::test_app(fetcher.clone());
    let request = |percent: u32| {
        post_json(
            "/v1/summarize",
            json!({ "url": "https://example.com/tin-tuc/duong-ven-song", "percent": percent }),
        )
    };

    let first = app.clone().oneshot(request(40)).await.unwrap();
    assert_eq!(read_json(first).await["cached"], false);

    let second = app.clone().oneshot(request(40)).await.unwrap();
    assert_eq!(read_json(second).await["cached"], true);
    assert_eq!(fetcher.calls(), 1);

    let other = app.oneshot(request(80)).await.unwrap();
    assert_eq!(read_json(other).await["cached"], false);
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn test_summarize_rejects_bad_percent() {
    let fetcher = helpers::StubFetcher::failing();
    let app = helpers::test_app(fetcher.clone());

    let response = app
        .oneshot(post_json(
            "/v1/summarize",
            json!({ "url": "https://example.com", "percent": 150 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = serde_json::from_value(read_json(response).await).unwrap();
    assert_eq!(body.error, "Percent must be between 1 and 100");
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_summarize_fetch_failure() {
    let app = helpers::test_app(helpers::StubFetcher::failing());

    let response = app
        .oneshot(post_json("/v1/summarize", json!({ "url": "https://example.com/down" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Failed to fetch article"));
}

#[tokio::test]
async fn test_summarize_page_without_content() {
    let fetcher = helpers::StubFetcher::page("<html><body><script>app()</script></body></html>");
    let app = helpers::test_app(fetcher);

    let response = app
        .oneshot(post_json("/v1/summarize", json!({ "url": "https://example.com/spa" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_bullets_respect_budget() {
    let app = helpers::test_app(helpers::StubFetcher::failing());
    let text = helpers::CLEAN_ARTICLE.join(" ");

    let response = app
        .oneshot(post_json(
            "/v1/bullets",
            json!({ "text": text, "maxBullets": 4, "maxTotalLength": 250 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let bullets = body["bullets"].as_array().unwrap();
    assert!(!bullets.is_empty());
    assert!(bullets.len() <= 4);
    assert!(body["text"].as_str().unwrap().chars().count() <= 250);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = helpers::test_app(helpers::StubFetcher::failing());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert!(body["paths"]["/v1/summarize"].is_object());
    assert!(body["paths"]["/v1/bullets"].is_object());
    assert!(body["paths"]["/healthz"].is_object());
}
