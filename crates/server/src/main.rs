use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use server_api::{fetch_state, make_move, reset_game, GameContext};
use shared::{
    domain::GameState,
    error::ErrorDetail,
    protocol::{MoveRequest, MOVE_ROUTE, RESET_ROUTE, STATE_ROUTE},
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

const MAX_REQUEST_BYTES: usize = 16 * 1024;

type HttpError = (StatusCode, Json<ErrorDetail>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings()?;
    if !settings.static_dir.is_dir() {
        warn!(
            static_dir = %settings.static_dir.display(),
            "static directory not found; / and /static will return 404"
        );
    }

    let state = AppState {
        game: GameContext::new(settings.board_size),
        reset_on_fetch: settings.reset_on_fetch,
        static_dir: settings.static_dir,
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, board_size = settings.board_size, "game server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route(STATE_ROUTE, get(http_get_state))
        .route(MOVE_ROUTE, post(http_make_move))
        .route(RESET_ROUTE, post(http_reset))
        .nest_service("/static", ServeDir::new(&state.static_dir))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, HttpError> {
    let path = state.static_dir.join("index.html");
    tokio::fs::read_to_string(&path)
        .await
        .map(Html)
        .map_err(|err| {
            warn!(path = %path.display(), %err, "index page unavailable");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorDetail::new("Not Found")),
            )
        })
}

async fn http_get_state(State(state): State<Arc<AppState>>) -> Json<GameState> {
    Json(fetch_state(&state.game, state.reset_on_fetch).await)
}

async fn http_make_move(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameState>, HttpError> {
    let Json(request) = body.map_err(|rejection| {
        (
            rejection.status(),
            Json(ErrorDetail::new(rejection.body_text())),
        )
    })?;

    make_move(&state.game, request)
        .await
        .map(Json)
        .map_err(|err| {
            info!(row = request.row, col = request.col, %err, "move rejected");
            (StatusCode::BAD_REQUEST, Json(ErrorDetail::from(err)))
        })
}

async fn http_reset(State(state): State<Arc<AppState>>) -> Json<GameState> {
    Json(reset_game(&state.game).await)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
