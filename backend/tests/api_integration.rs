//! HTTP surface integration tests using Router::oneshot against scripted
//! stub engines, so orchestration is exercised end to end without a
//! compiled engine binary.

use std::io::Write as _;
use std::os::unix::fs::PermissionsExt;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use backend::api;
use backend::supervisor::{Supervisor, SupervisorConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A stub whose `go` always answers with a book hit and a normal best move.
const STUB_NORMAL: &str = "info string bookhit move=e2e4\\ninfo depth 3 score cp 25 pv e2e4 e7e5\\nbestmove e2e4\\n";
/// A stub for a mated position.
const STUB_MATE: &str = "info depth 1 score mate 0\\nbestmove 0000\\n";
/// A stub for a stalemate.
const STUB_STALEMATE: &str = "info depth 1 score cp 0\\nbestmove 0000\\n";
/// A stub producing three ranked lines, one of them a mate score.
const STUB_MULTIPV: &str = "info depth 8 multipv 1 score cp 40 pv e2e4 e7e5\\ninfo depth 8 multipv 2 score cp 12 pv d2d4 d7d5\\ninfo depth 8 multipv 3 score mate 5 pv g1f3 g8f6\\nbestmove e2e4\\n";

fn write_stub(dir: &tempfile::TempDir, name: &str, go_reply: &str) -> String {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create stub");
    let script = format!(
        "#!/bin/sh\n\
         while IFS= read -r line; do\n\
           case \"$line\" in\n\
             uci) printf 'id name stub\\nuciok\\n' ;;\n\
             isready) printf 'readyok\\n' ;;\n\
             go*) printf '{}' ;;\n\
             quit) exit 0 ;;\n\
           esac\n\
         done\n",
        go_reply
    );
    file.write_all(script.as_bytes()).expect("write stub");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod stub");
    path.to_str().expect("utf-8 path").to_string()
}

async fn router_with(
    dir: &tempfile::TempDir,
    go_reply: &str,
    stockfish_reply: Option<&str>,
) -> Router {
    let engine_path = write_stub(dir, "engine.sh", go_reply);
    let stockfish_path = stockfish_reply.map(|reply| write_stub(dir, "stockfish.sh", reply));
    let supervisor = Supervisor::start(SupervisorConfig {
        engine_path,
        stockfish_path,
    })
    .await
    .expect("stub engine starts");
    api::router(supervisor)
}

async fn request(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request succeeds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn health_is_ok() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, None).await;
    let (status, body) = request(
        app,
        Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .expect("request builds"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
}

#[tokio::test]
async fn move_requires_fen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, None).await;
    let (status, body) = request(app, post_json("/api/move", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("MISSING_FEN"));
}

#[tokio::test]
async fn move_rejects_non_array_moves() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, None).await;
    let (status, body) = request(
        app,
        post_json(
            "/api/move",
            json!({ "fen": STARTPOS_FEN, "moves_uci": "e2e4" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("INVALID_MOVES_UCI"));
}

#[tokio::test]
async fn move_rejects_bad_movetime() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, None).await;
    for bad in [json!(0), json!(-5), json!("fast"), json!(1.5)] {
        let (status, body) = request(
            app.clone(),
            post_json(
                "/api/move",
                json!({ "fen": STARTPOS_FEN, "movetime_ms": bad }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "movetime {:?}", bad);
        assert_eq!(body["code"], json!("INVALID_MOVETIME"));
    }
}

#[tokio::test]
async fn move_returns_engine_best_move_and_telemetry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, None).await;
    let (status, body) = request(
        app,
        post_json(
            "/api/move",
            json!({ "fen": STARTPOS_FEN, "movetime_ms": 200 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uci"], json!("e2e4"));
    assert_eq!(body["terminal"], json!(false));
    assert_eq!(body["timeout"], json!(false));
    assert_eq!(body["depth"], json!(3));
    assert_eq!(body["score"]["type"], json!("cp"));
    assert_eq!(body["score"]["value"], json!(25));
    assert_eq!(body["pv"], json!("e2e4 e7e5"));
    assert_eq!(body["bookhit"], json!(true));
}

#[tokio::test]
async fn empty_moves_list_is_equivalent_to_omitting_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, None).await;
    let (_, with_empty) = request(
        app.clone(),
        post_json(
            "/api/move",
            json!({ "fen": STARTPOS_FEN, "moves_uci": [], "movetime_ms": 200 }),
        ),
    )
    .await;
    let (_, without) = request(
        app,
        post_json(
            "/api/move",
            json!({ "fen": STARTPOS_FEN, "movetime_ms": 200 }),
        ),
    )
    .await;
    assert_eq!(with_empty["uci"], without["uci"]);
    assert_eq!(with_empty["terminal"], without["terminal"]);
}

#[tokio::test]
async fn mate_bestmove_0000_reports_checkmate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_MATE, None).await;
    let (status, body) = request(
        app,
        post_json(
            "/api/move",
            json!({ "fen": "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1", "movetime_ms": 50 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uci"], Value::Null);
    assert_eq!(body["terminal"], json!(true));
    assert_eq!(body["reason"], json!("CHECKMATE"));
    assert_eq!(body["timeout"], json!(false));
}

#[tokio::test]
async fn stalemate_bestmove_0000_reports_no_legal_moves() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_STALEMATE, None).await;
    let (status, body) = request(
        app,
        post_json(
            "/api/move",
            json!({ "fen": "7k/5Q2/5K2/8/8/8/8/8 b - - 0 1", "movetime_ms": 50 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uci"], Value::Null);
    assert_eq!(body["terminal"], json!(true));
    assert_eq!(body["reason"], json!("NO_LEGAL_MOVES"));
}

#[tokio::test]
async fn status_reflects_finished_request_and_adopted_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, None).await;

    let (status, _) = request(
        app.clone(),
        Request::builder()
            .method("POST")
            .uri("/api/move")
            .header("content-type", "application/json")
            .header("x-request-id", "req-status-test")
            .body(Body::from(
                json!({ "fen": STARTPOS_FEN, "movetime_ms": 200 }).to_string(),
            ))
            .expect("request builds"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(
        app,
        Request::builder()
            .uri("/api/move/status/req-status-test")
            .body(Body::empty())
            .expect("request builds"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!("req-status-test"));
    assert_eq!(body["active"], json!(false));
    assert_eq!(body["bestmove"], json!("e2e4"));
    assert_eq!(body["terminal"], json!(false));
    assert_eq!(body["depth"], json!(3));
    assert!(body["finished_at"].is_i64());
}

#[tokio::test]
async fn status_unknown_id_is_404() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, None).await;
    let (status, body) = request(
        app,
        Request::builder()
            .uri("/api/move/status/no-such-request")
            .body(Body::empty())
            .expect("request builds"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!("UNKNOWN_REQUEST_ID"));
}

#[tokio::test]
async fn hint_without_secondary_engine_is_503() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, None).await;
    let (status, body) = request(
        app,
        post_json("/api/hint", json!({ "fen": STARTPOS_FEN })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], json!("STOCKFISH_UNAVAILABLE"));
}

#[tokio::test]
async fn hint_returns_ranked_lines_with_projected_mate_scores() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, Some(STUB_MULTIPV)).await;
    let (status, body) = request(
        app,
        post_json(
            "/api/hint",
            json!({ "fen": STARTPOS_FEN, "multipv": 3, "movetime_ms": 100 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["best"], json!("e2e4"));
    let lines = body["lines"].as_array().expect("lines array");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["uci"], json!("e2e4"));
    assert_eq!(lines[0]["scoreCp"], json!(40));
    assert_eq!(lines[1]["uci"], json!("d2d4"));
    assert_eq!(lines[2]["uci"], json!("g1f3"));
    assert_eq!(lines[2]["scoreCp"], json!(100_000 - 5));
    assert_eq!(
        lines[0]["pvMoves"],
        json!(["e2e4", "e7e5"]),
        "pv moves are split into a list"
    );
}

#[tokio::test]
async fn hint_validates_fen_like_move() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = router_with(&dir, STUB_NORMAL, Some(STUB_MULTIPV)).await;
    let (status, body) = request(app, post_json("/api/hint", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("MISSING_FEN"));
}
