use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::{
    ai::ImageGenerationService,
    models::{Config, GenerationRequest, GenerationResult},
    proxy,
    view::{self, ViewState},
    Error,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub image_gen: Arc<dyn ImageGenerationService>,
}

pub fn build_router(config: Arc<Config>, image_gen: Arc<dyn ImageGenerationService>) -> Router {
    let state = AppState { config, image_gen };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        // no body limit, so every request is answered with JSON
        .route(
            "/api/generate",
            post(generate).layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<String> {
    Html(view::render_page(&ViewState::new()))
}

async fn health() -> &'static str {
    "ok"
}

async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerationResult>, Error> {
    let request = GenerationRequest::from_body(&body);

    proxy::generate(&state.config, state.image_gen.as_ref(), &request)
        .await
        .map(Json)
        .inspect_err(|e| match e {
            Error::MissingApiKey | Error::MissingImage => {}
            other => error!("Generation request failed: {}", other),
        })
}
