//! HTTP surface.
//!
//! Bodies are validated from raw JSON so the error codes match the contract
//! exactly (a non-array `moves_uci` is a 400 with `INVALID_MOVES_UCI`, not a
//! deserialization failure). Handlers return `Result<_, ApiError>`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::supervisor::{generate_request_id, resolve_options, RequestState, Supervisor};

#[derive(Clone)]
pub struct AppState {
    pub supervisor: Arc<Supervisor>,
}

pub fn router(supervisor: Arc<Supervisor>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/move", post(play_move))
        .route("/api/move/status/{id}", get(move_status))
        .route("/api/hint", post(hint))
        .with_state(AppState { supervisor })
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// `fen` is required; `moves_uci`, when present, must be an array of
/// strings; `movetime_ms`, when present, must be a positive integer.
fn validate_common(body: &Value) -> Result<(String, Option<Vec<String>>), ApiError> {
    let fen = body
        .get("fen")
        .and_then(Value::as_str)
        .ok_or(ApiError::MissingFen)?
        .to_string();

    let moves_uci = match body.get("moves_uci") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut moves = Vec::with_capacity(items.len());
            for item in items {
                let uci = item.as_str().ok_or(ApiError::InvalidMovesUci)?;
                moves.push(uci.to_string());
            }
            Some(moves)
        }
        Some(_) => return Err(ApiError::InvalidMovesUci),
    };

    Ok((fen, moves_uci))
}

fn positive_u64(body: &Value, field: &str) -> Option<u64> {
    body.get(field).and_then(Value::as_u64).filter(|&v| v > 0)
}

async fn play_move(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let (fen, moves_uci) = validate_common(&body)?;

    let movetime_ms = match body.get("movetime_ms") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_u64().filter(|&v| v > 0).ok_or(ApiError::InvalidMovetime)?),
    };
    let depth = positive_u64(&body, "depth").map(|v| v as u32);
    let hash_mb = positive_u64(&body, "hash_mb").map(|v| v as u32);
    let skill = body.get("skill").and_then(Value::as_str);
    let options = resolve_options(skill, movetime_ms, depth, hash_mb);

    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let outcome = state
        .supervisor
        .play_move(request_id, fen, moves_uci, options)
        .await?;

    Ok(Json(json!({
        "uci": outcome.uci,
        "terminal": outcome.terminal,
        "reason": outcome.reason,
        "depth": outcome.depth,
        "score": outcome.score,
        "pv": outcome.pv,
        "bookhit": outcome.bookhit,
        "timeout": outcome.timeout,
    })))
}

async fn move_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let request = state.supervisor.status(&id)?;
    Ok(Json(status_view(&request)))
}

fn status_view(state: &RequestState) -> Value {
    let bestmove = state.bestmove.as_deref().filter(|&m| m != "0000");
    let terminal = state.bestmove.as_deref() == Some("0000");
    let reason = if terminal {
        match &state.last_info.score {
            Some(score) if score.kind == "mate" => Some("CHECKMATE"),
            _ => Some("NO_LEGAL_MOVES"),
        }
    } else {
        None
    };
    json!({
        "id": state.id,
        "active": state.active,
        "started_at": state.started_at,
        "finished_at": state.finished_at,
        "last_info_at": state.last_info_at,
        "depth": state.last_info.depth,
        "score": state.last_info.score,
        "pv": state.last_info.pv,
        "bestmove": bestmove,
        "terminal": terminal,
        "reason": reason,
        "error": state.error,
    })
}

async fn hint(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let (fen, moves_uci) = validate_common(&body)?;
    let multipv = body
        .get("multipv")
        .and_then(Value::as_u64)
        .unwrap_or(3)
        .clamp(1, 8) as u32;
    let movetime_ms = body
        .get("movetime_ms")
        .and_then(Value::as_u64)
        .unwrap_or(120)
        .clamp(50, 2000);

    let outcome = state
        .supervisor
        .hint(fen, moves_uci, multipv, movetime_ms)
        .await?;

    let mut response = json!({
        "best": outcome.best,
        "lines": outcome.lines,
    });
    if outcome.timeout {
        response["timeout"] = json!(true);
    }
    Ok(Json(response))
}
