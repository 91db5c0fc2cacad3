use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use scraper::Html;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    api::dtos::{BulletsRequest, ErrorResponse, SummarizeRequest, SummarizeResponse},
    app_state::AppState,
    cache::cache_key,
    extractor::language::needs_translation,
    summarizer::BulletSet,
};

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: error.into() })).into_response()
}

#[utoipa::path(
    post,
    path = "/v1/summarize",
    tag = "summaries",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Article summarized", body = SummarizeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "No article content found", body = ErrorResponse),
        (status = 502, description = "Article could not be fetched", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
#[instrument(skip_all, fields(url = %payload.url, percent = payload.percent))]
pub async fn summarize(State(state): State<AppState>, Json(payload): Json<SummarizeRequest>) -> Response {
    if let Err(error) = payload.validate() {
        return error_response(StatusCode::BAD_REQUEST, error);
    }
    let url = payload.url.trim().to_string();
    // validate() guarantees 1..=100
    let percent = payload.percent as u8;

    let key = cache_key(&url, percent);
    if let Some(mut hit) = state.cache.get(&key) {
        info!("Summary served from cache");
        hit.cached = true;
        return Json(hit).into_response();
    }

    let page = match state.fetcher.fetch(&url).await {
        Ok(page) => page,
        Err(err) => {
            warn!(error = %err, "Failed to fetch article");
            return error_response(StatusCode::BAD_GATEWAY, format!("Failed to fetch article: {err}"));
        }
    };

    debug!(
        final_url = %page.url_final,
        status = %page.status,
        content_type = ?page.headers.get(CONTENT_TYPE),
        charset = ?page.charset,
        bytes = page.body_raw.len(),
        "Article fetched"
    );

    let fetched_at = page.fetched_at;
    let summarizer = state.summarizer.clone();
    let html = page.body_utf8;
    let job = tokio::task::spawn_blocking(move || {
        let document = Html::parse_document(&html);
        let metadata = summarizer.extractor().metadata(&document);
        let output = summarizer.extract_and_summarize(&document, u32::from(percent));
        let translate = needs_translation(&output.full_content);
        (metadata, output, translate)
    })
    .await;

    let (metadata, output, translate) = match job {
        Ok(result) => result,
        Err(err) => {
            error!(error = %err, "Summarization task failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Summarization failed");
        }
    };

    if output.original_paragraphs.is_empty() {
        info!("No article content extracted");
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "No article content could be extracted",
        );
    }

    let response = SummarizeResponse::new(url, metadata, output, translate, fetched_at);
    state.cache.set(&key, response.clone(), state.cache_ttl);
    info!(
        paragraphs = response.stats.summarized_paragraph_count,
        actual_percent = response.stats.actual_percent,
        "Article summarized"
    );
    Json(response).into_response()
}

#[utoipa::path(
    post,
    path = "/v1/bullets",
    tag = "summaries",
    request_body = BulletsRequest,
    responses(
        (status = 200, description = "Bullet points", body = BulletSet),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn bullets(State(state): State<AppState>, Json(payload): Json<BulletsRequest>) -> Response {
    if let Err(error) = payload.validate() {
        return error_response(StatusCode::BAD_REQUEST, error);
    }
    let set = state
        .summarizer
        .bullet_points(&payload.text, payload.max_bullets, payload.max_total_length);
    info!(bullets = set.bullets.len(), "Bullet points created");
    Json(set).into_response()
}
