use super::*;
use axum::{body, body::Body, http::Request};
use shared::domain::{Cell, Mark};
use std::{
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

fn test_app(reset_on_fetch: bool, static_dir: PathBuf) -> Router {
    build_router(Arc::new(AppState {
        game: GameContext::new(3),
        reset_on_fetch,
        static_dir,
    }))
}

fn move_request(row: i64, col: i64) -> Request<Body> {
    Request::post("/move")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "row": row, "col": col }).to_string(),
        ))
        .expect("request")
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = test_app(true, PathBuf::from("missing"));
    let request = Request::get("/healthz")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn state_returns_wire_shaped_game() {
    let app = test_app(false, PathBuf::from("missing"));
    let request = Request::get("/state").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let value: serde_json::Value = body_json(response).await;
    assert_eq!(
        value,
        serde_json::json!({
            "board": [["", "", ""], ["", "", ""], ["", "", ""]],
            "winner": null,
            "is_draw": false,
            "current_player": "X",
        })
    );
}

#[tokio::test]
async fn move_then_state_reflects_reset_on_fetch_setting() {
    let app = test_app(true, PathBuf::from("missing"));
    let response = app.clone().oneshot(move_request(1, 1)).await.expect("move");
    assert_eq!(response.status(), StatusCode::OK);
    let state: GameState = body_json(response).await;
    assert_eq!(state.board.get(1, 1), Some(Cell::Taken(Mark::X)));
    assert_eq!(state.current_player, Mark::O);

    let request = Request::get("/state").body(Body::empty()).expect("request");
    let state: GameState = body_json(app.oneshot(request).await.expect("state")).await;
    assert_eq!(state, GameState::new(3));
}

#[tokio::test]
async fn rejected_move_returns_detail() {
    let app = test_app(false, PathBuf::from("missing"));
    app.clone().oneshot(move_request(0, 0)).await.expect("move");

    let response = app.clone().oneshot(move_request(0, 0)).await.expect("move");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let detail: ErrorDetail = body_json(response).await;
    assert_eq!(detail.detail, "Cell already taken.");

    let response = app.oneshot(move_request(5, 0)).await.expect("move");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let detail: ErrorDetail = body_json(response).await;
    assert_eq!(detail.detail, "Move is outside the board.");
}

#[tokio::test]
async fn finished_game_rejects_moves_until_reset() {
    let app = test_app(false, PathBuf::from("missing"));
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        let response = app
            .clone()
            .oneshot(move_request(row, col))
            .await
            .expect("move");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(move_request(2, 2)).await.expect("move");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let detail: ErrorDetail = body_json(response).await;
    assert_eq!(detail.detail, "Game has already ended.");

    let reset = Request::post("/reset").body(Body::empty()).expect("request");
    let response = app.clone().oneshot(reset).await.expect("reset");
    assert_eq!(response.status(), StatusCode::OK);
    let state: GameState = body_json(response).await;
    assert_eq!(state, GameState::new(3));

    let response = app.oneshot(move_request(2, 2)).await.expect("move");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_move_body_is_reported_as_detail() {
    let app = test_app(false, PathBuf::from("missing"));
    let request = Request::post("/move")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"row": "a"}"#))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert!(response.status().is_client_error());
    let detail: ErrorDetail = body_json(response).await;
    assert!(!detail.detail.is_empty());
}

fn oversized_move_body() -> String {
    format!(
        r#"{{"row": 0, "col": 0, "padding": "{}"}}"#,
        "x".repeat(MAX_REQUEST_BYTES)
    )
}

#[tokio::test]
async fn oversized_move_body_is_rejected_with_detail() {
    let app = test_app(false, PathBuf::from("missing"));
    let request = Request::post("/move")
        .header("content-type", "application/json")
        .body(Body::from(oversized_move_body()))
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let detail: ErrorDetail = body_json(response).await;
    assert!(!detail.detail.is_empty());

    let state: GameState = body_json(
        app.oneshot(Request::get("/state").body(Body::empty()).expect("request"))
            .await
            .expect("state"),
    )
    .await;
    assert_eq!(state, GameState::new(3));
}

#[tokio::test]
async fn declared_oversized_body_is_refused_before_reading() {
    let app = test_app(false, PathBuf::from("missing"));
    let body = oversized_move_body();
    let request = Request::post("/move")
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(Body::from(body))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = test_app(false, PathBuf::from("missing"));
    let request = Request::get("/state")
        .header("origin", "http://example.test")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn index_is_served_from_static_dir() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let static_dir = env::temp_dir().join(format!("grid_game_static_test_{suffix}"));
    fs::create_dir_all(&static_dir).expect("static dir");
    fs::write(static_dir.join("index.html"), "<h1>grid</h1>").expect("index");
    fs::write(static_dir.join("style.css"), "body {}").expect("css");

    let app = test_app(false, static_dir.clone());
    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"<h1>grid</h1>");

    let response = app
        .oneshot(
            Request::get("/static/style.css")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    fs::remove_dir_all(static_dir).expect("cleanup");
}

#[tokio::test]
async fn missing_index_is_not_found() {
    let app = test_app(false, PathBuf::from("definitely-missing-static-dir"));
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
