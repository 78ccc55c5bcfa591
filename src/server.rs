use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::api::{
    ApiHooksRequest, ApiHooksResponse, ApiPostsRequest, ApiPostsResponse, ApiRewriteRequest,
    ApiScoreRequest,
};
use virality_engine::config::ScoringConfig;
use virality_engine::generate::{build_generator, ContentGenerator};
use virality_engine::rewrite::RewriteEngine;
use virality_engine::scoring::ScoringEngine;
use virality_engine::{EngineError, RewriteResult, ScoreResult};

#[derive(Clone)]
struct AppState {
    scoring: Arc<ScoringEngine>,
    rewriter: Arc<RewriteEngine>,
    generator: Arc<dyn ContentGenerator>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, config_path) = ScoringConfig::load(None)?;
    match config_path.as_ref().filter(|path| path.exists()) {
        Some(path) => info!(path = %path.display(), "loaded scoring config"),
        None => info!("using default scoring config"),
    }
    let generator = build_generator(&config.generator)?;
    let state = AppState {
        scoring: Arc::new(ScoringEngine::new(config.clone())),
        rewriter: Arc::new(RewriteEngine::new(config)),
        generator,
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/score", post(score_handler))
        .route("/api/rewrite", post(rewrite_handler))
        .route("/api/generate/posts", post(posts_handler))
        .route("/api/generate/hooks", post(hooks_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;
    info!(%addr, "listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn score_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiScoreRequest>,
) -> Result<Json<ScoreResult>, (StatusCode, String)> {
    let (text, platform) = request.into_parts().map_err(bad_request)?;
    info!(chars = text.len(), platform = platform.map(|p| p.label()), "scoring request");
    let result = state.scoring.score(&text, platform).map_err(bad_request)?;
    Ok(Json(result))
}

async fn rewrite_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiRewriteRequest>,
) -> Result<Json<RewriteResult>, (StatusCode, String)> {
    let (text, platform) = request.into_parts().map_err(bad_request)?;
    info!(chars = text.len(), platform = platform.map(|p| p.label()), "rewrite request");
    let result = state
        .rewriter
        .rewrite(&text, platform)
        .map_err(bad_request)?;
    Ok(Json(result))
}

async fn posts_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiPostsRequest>,
) -> Result<Json<ApiPostsResponse>, (StatusCode, String)> {
    let (topic, platforms) = request.into_parts().map_err(bad_request)?;
    let posts = state
        .generator
        .generate_social_posts(&topic, &platforms)
        .map_err(bad_request)?;
    Ok(Json(ApiPostsResponse { posts }))
}

async fn hooks_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiHooksRequest>,
) -> Result<Json<ApiHooksResponse>, (StatusCode, String)> {
    let (topic, count, platform) = request.into_parts().map_err(bad_request)?;
    let hooks = state
        .generator
        .generate_hooks(&topic, count, platform)
        .map_err(bad_request)?;
    Ok(Json(ApiHooksResponse { hooks }))
}

fn bad_request(err: EngineError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}
