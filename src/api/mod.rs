pub mod dtos;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, health};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, handlers::summarize, handlers::bullets),
    components(schemas(
        dtos::SummarizeRequest,
        dtos::SummarizeResponse,
        dtos::BulletsRequest,
        dtos::ErrorResponse,
        health::HealthResponse,
        crate::summarizer::BulletSet,
        crate::summarizer::SummaryStats,
        crate::summarizer::Language
    )),
    tags(
        (name = "summaries", description = "Article extraction and summarization"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_check))
        .route("/v1/summarize", post(handlers::summarize))
        .route("/v1/bullets", post(handlers::bullets))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
