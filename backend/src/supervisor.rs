//! Engine supervisor.
//!
//! Owns the primary engine client (and an optional secondary used for
//! multi-PV hints), serializes searches per client through a queue mutex,
//! tracks per-request live telemetry parsed from `info` lines, and maps
//! engine liveness failures into the API error taxonomy. A dead engine is
//! not restarted: later requests surface `ENGINE_ERROR`.

use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::uci_client::{ClientError, UciClient};

/// Finalized request states are evicted this long after `finished_at`.
pub const STATUS_EVICT_MS: i64 = 60_000;

const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);
const OPTION_TIMEOUT: Duration = Duration::from_secs(5);

const ENGINE_CANDIDATES: [&str; 2] = [
    "target/release/chess_engine",
    "target/debug/chess_engine",
];
const STOCKFISH_CANDIDATES: [&str; 4] = [
    "/usr/local/bin/stockfish",
    "/usr/bin/stockfish",
    "/opt/homebrew/bin/stockfish",
    "stockfish",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastInfo {
    pub depth: Option<i64>,
    pub score: Option<Score>,
    pub pv: String,
}

#[derive(Debug, Clone)]
pub struct RequestState {
    pub id: String,
    pub active: bool,
    pub started_at: i64,
    pub finished_at: Option<i64>,
    pub last_info_at: Option<i64>,
    pub last_info: LastInfo,
    pub bestmove: Option<String>,
    pub bookhit: bool,
    pub error: Option<&'static str>,
}

impl RequestState {
    fn new(id: String, started_at: i64) -> RequestState {
        RequestState {
            id,
            active: true,
            started_at,
            finished_at: None,
            last_info_at: None,
            last_info: LastInfo::default(),
            bestmove: None,
            bookhit: false,
            error: None,
        }
    }
}

/// Movetime/depth/hash resolved from a skill preset plus caller overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOptions {
    pub movetime_ms: u64,
    pub depth: Option<u32>,
    pub hash_mb: u32,
}

pub fn resolve_options(
    skill: Option<&str>,
    movetime_ms: Option<u64>,
    depth: Option<u32>,
    hash_mb: Option<u32>,
) -> MoveOptions {
    let preset = match skill {
        Some("blitz") => MoveOptions {
            movetime_ms: 100,
            depth: None,
            hash_mb: 16,
        },
        Some("strong") => MoveOptions {
            movetime_ms: 1200,
            depth: None,
            hash_mb: 128,
        },
        // "rapid" and anything unrecognized.
        _ => MoveOptions {
            movetime_ms: 300,
            depth: None,
            hash_mb: 64,
        },
    };
    MoveOptions {
        movetime_ms: movetime_ms.unwrap_or(preset.movetime_ms),
        depth: depth.or(preset.depth),
        hash_mb: hash_mb.unwrap_or(preset.hash_mb),
    }
}

#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub uci: Option<String>,
    pub terminal: bool,
    pub reason: Option<&'static str>,
    pub depth: Option<i64>,
    pub score: Option<Score>,
    pub pv: String,
    pub bookhit: bool,
    pub timeout: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HintLine {
    pub uci: String,
    #[serde(rename = "scoreCp")]
    pub score_cp: i64,
    #[serde(rename = "pvMoves")]
    pub pv_moves: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct HintOutcome {
    pub best: Option<String>,
    pub lines: Vec<HintLine>,
    pub timeout: bool,
}

/// One engine child: the line channel, a queue mutex serializing tasks, and
/// a cache of the options already applied.
pub struct EngineHandle {
    pub client: UciClient,
    queue: tokio::sync::Mutex<()>,
    options: Mutex<HashMap<String, String>>,
}

impl EngineHandle {
    /// Spawn the binary and run the `uci`/`isready` handshake.
    pub async fn spawn(name: &'static str, path: &str) -> Result<Arc<EngineHandle>, ClientError> {
        let client = UciClient::spawn(name, path)
            .map_err(|e| ClientError::Engine(format!("spawn {}: {}", path, e)))?;
        let handle = Arc::new(EngineHandle {
            client,
            queue: tokio::sync::Mutex::new(()),
            options: Mutex::new(HashMap::new()),
        });
        handle.client.send("uci").await?;
        handle
            .client
            .wait_for(|l| l == "uciok", HANDSHAKE_TIMEOUT, None)
            .await?;
        handle.client.send("isready").await?;
        handle
            .client
            .wait_for(|l| l == "readyok", HANDSHAKE_TIMEOUT, None)
            .await?;
        info!(engine = name, path, "engine ready");
        Ok(handle)
    }

    /// Acquire this engine's serialization queue; tasks holding the guard
    /// never interleave commands.
    pub async fn lock_queue(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.queue.lock().await
    }

    /// Apply a UCI option unless it already holds `value`; waits for the
    /// engine to acknowledge via `readyok`.
    pub async fn set_option_cached(&self, name: &str, value: &str) -> Result<(), ClientError> {
        {
            let options = self.options.lock().unwrap();
            if options.get(name).map(String::as_str) == Some(value) {
                return Ok(());
            }
        }
        self.client
            .send(&format!("setoption name {} value {}", name, value))
            .await?;
        self.client.send("isready").await?;
        self.client
            .wait_for(|l| l == "readyok", OPTION_TIMEOUT, None)
            .await?;
        self.options
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

pub struct SupervisorConfig {
    pub engine_path: String,
    pub stockfish_path: Option<String>,
}

impl SupervisorConfig {
    /// `ENGINE_PATH` overrides the primary binary; `STOCKFISH_PATH` the
    /// secondary, otherwise a fixed candidate list is probed.
    pub fn from_env() -> SupervisorConfig {
        let engine_path = env::var("ENGINE_PATH").unwrap_or_else(|_| {
            ENGINE_CANDIDATES
                .iter()
                .find(|p| Path::new(p).exists())
                .unwrap_or(&ENGINE_CANDIDATES[0])
                .to_string()
        });
        let stockfish_path = env::var("STOCKFISH_PATH").ok().or_else(|| {
            STOCKFISH_CANDIDATES
                .iter()
                .find(|p| Path::new(p).exists())
                .map(|p| p.to_string())
        });
        SupervisorConfig {
            engine_path,
            stockfish_path,
        }
    }
}

pub struct Supervisor {
    engine: Arc<EngineHandle>,
    stockfish: Option<Arc<EngineHandle>>,
    requests: Arc<Mutex<HashMap<String, RequestState>>>,
    /// Request currently attributed `info` lines from the primary engine.
    active: Arc<Mutex<Option<String>>>,
}

impl Supervisor {
    /// Start the primary engine (required) and the secondary (optional: a
    /// missing binary or failed handshake only disables hints).
    pub async fn start(config: SupervisorConfig) -> Result<Arc<Supervisor>, ClientError> {
        let engine = EngineHandle::spawn("engine", &config.engine_path).await?;
        let stockfish = match &config.stockfish_path {
            Some(path) => match EngineHandle::spawn("stockfish", path).await {
                Ok(handle) => Some(handle),
                Err(err) => {
                    warn!("hint engine unavailable: {}", err);
                    None
                }
            },
            None => None,
        };

        let supervisor = Arc::new(Supervisor {
            engine,
            stockfish,
            requests: Arc::new(Mutex::new(HashMap::new())),
            active: Arc::new(Mutex::new(None)),
        });
        supervisor.install_info_observer();
        Ok(supervisor)
    }

    pub fn hint_available(&self) -> bool {
        self.stockfish.is_some()
    }

    /// Permanent observer on the primary: while a request is active, `info`
    /// lines update its live telemetry and `bestmove` finalizes it.
    fn install_info_observer(&self) {
        let requests = Arc::clone(&self.requests);
        let active = Arc::clone(&self.active);
        self.engine.client.add_observer(Box::new(move |line| {
            let Some(id) = active.lock().unwrap().clone() else {
                return;
            };
            if let Some(parsed) = parse_info_line(line) {
                let mut requests = requests.lock().unwrap();
                if let Some(state) = requests.get_mut(&id) {
                    state.last_info = parsed;
                    state.last_info_at = Some(Utc::now().timestamp_millis());
                }
            } else if let Some(rest) = line.strip_prefix("bestmove ") {
                let uci = rest.split_whitespace().next().unwrap_or("").to_string();
                let mut requests = requests.lock().unwrap();
                if let Some(state) = requests.get_mut(&id) {
                    state.bestmove = Some(uci);
                    state.active = false;
                    state.finished_at = Some(Utc::now().timestamp_millis());
                }
                drop(requests);
                *active.lock().unwrap() = None;
            }
        }));
    }

    /// Handle one move request end to end on the primary engine's queue.
    pub async fn play_move(
        &self,
        request_id: String,
        fen: String,
        moves_uci: Option<Vec<String>>,
        options: MoveOptions,
    ) -> Result<MoveOutcome, ApiError> {
        self.requests.lock().unwrap().insert(
            request_id.clone(),
            RequestState::new(request_id.clone(), Utc::now().timestamp_millis()),
        );

        let _queue = self.engine.lock_queue().await;
        *self.active.lock().unwrap() = Some(request_id.clone());

        let result = self
            .run_move_task(&request_id, &fen, moves_uci.as_deref(), options)
            .await;

        *self.active.lock().unwrap() = None;
        self.engine.client.cancel_request(&request_id);

        match result {
            Ok(outcome) => Ok(outcome),
            Err(ClientError::Timeout) => {
                self.mark_errored(&request_id, "ENGINE_TIMEOUT");
                let snapshot = self.snapshot(&request_id);
                Ok(MoveOutcome {
                    uci: None,
                    terminal: false,
                    reason: None,
                    depth: snapshot.as_ref().and_then(|s| s.last_info.depth),
                    score: snapshot.as_ref().and_then(|s| s.last_info.score.clone()),
                    pv: snapshot
                        .as_ref()
                        .map(|s| s.last_info.pv.clone())
                        .unwrap_or_default(),
                    bookhit: snapshot.map(|s| s.bookhit).unwrap_or(false),
                    timeout: true,
                })
            }
            Err(ClientError::Engine(message)) => {
                self.mark_errored(&request_id, "ENGINE_ERROR");
                Err(ApiError::Engine(message))
            }
        }
    }

    async fn run_move_task(
        &self,
        request_id: &str,
        fen: &str,
        moves_uci: Option<&[String]>,
        options: MoveOptions,
    ) -> Result<MoveOutcome, ClientError> {
        self.engine
            .set_option_cached("Hash", &options.hash_mb.to_string())
            .await?;

        let position = match moves_uci {
            Some(moves) if !moves.is_empty() => {
                format!("position startpos moves {}", moves.join(" "))
            }
            _ => format!("position fen {}", fen),
        };
        self.engine.client.send(&position).await?;

        // Transient observer: flag the request when the book answers.
        let requests = Arc::clone(&self.requests);
        let id_for_observer = request_id.to_string();
        let observer = self.engine.client.add_observer(Box::new(move |line| {
            if line.starts_with("info string bookhit") {
                if let Some(state) = requests.lock().unwrap().get_mut(&id_for_observer) {
                    state.bookhit = true;
                }
            }
        }));

        let go = match options.depth {
            Some(depth) => format!("go depth {}", depth),
            None => format!("go movetime {}", options.movetime_ms),
        };
        let send_result = self.engine.client.send(&go).await;
        let wait_result = match send_result {
            Ok(()) => {
                let deadline = Duration::from_millis((options.movetime_ms + 4000).max(5000));
                self.engine
                    .client
                    .wait_for(
                        |l| l.starts_with("bestmove "),
                        deadline,
                        Some(request_id.to_string()),
                    )
                    .await
            }
            Err(err) => Err(err),
        };
        self.engine.client.remove_observer(observer);
        let line = wait_result?;

        let uci = line.split_whitespace().nth(1).unwrap_or("").to_string();
        let snapshot = self.snapshot(request_id);
        let (last_info, bookhit) = snapshot
            .map(|s| (s.last_info, s.bookhit))
            .unwrap_or_default();

        if uci == "0000" {
            let reason = match &last_info.score {
                Some(score) if score.kind == "mate" => "CHECKMATE",
                _ => "NO_LEGAL_MOVES",
            };
            Ok(MoveOutcome {
                uci: None,
                terminal: true,
                reason: Some(reason),
                depth: last_info.depth,
                score: last_info.score,
                pv: last_info.pv,
                bookhit,
                timeout: false,
            })
        } else {
            Ok(MoveOutcome {
                uci: Some(uci),
                terminal: false,
                reason: None,
                depth: last_info.depth,
                score: last_info.score,
                pv: last_info.pv,
                bookhit,
                timeout: false,
            })
        }
    }

    /// Multi-PV hint on the secondary engine's queue.
    pub async fn hint(
        &self,
        fen: String,
        moves_uci: Option<Vec<String>>,
        multipv: u32,
        movetime_ms: u64,
    ) -> Result<HintOutcome, ApiError> {
        let Some(stockfish) = self.stockfish.as_ref() else {
            return Err(ApiError::StockfishUnavailable);
        };

        let _queue = stockfish.lock_queue().await;
        let result = run_hint_task(stockfish, &fen, moves_uci.as_deref(), multipv, movetime_ms).await;
        match result {
            Ok(outcome) => Ok(outcome),
            Err(ClientError::Timeout) => Ok(HintOutcome {
                best: None,
                lines: Vec::new(),
                timeout: true,
            }),
            Err(ClientError::Engine(message)) => Err(ApiError::Engine(message)),
        }
    }

    /// Status view for one request; finalized entries past the eviction
    /// window disappear first.
    pub fn status(&self, request_id: &str) -> Result<RequestState, ApiError> {
        let now = Utc::now().timestamp_millis();
        let mut requests = self.requests.lock().unwrap();
        requests.retain(|_, state| {
            state.active || state.finished_at.map_or(true, |at| now - at < STATUS_EVICT_MS)
        });
        requests
            .get(request_id)
            .cloned()
            .ok_or(ApiError::UnknownRequest)
    }

    fn snapshot(&self, request_id: &str) -> Option<RequestState> {
        self.requests.lock().unwrap().get(request_id).cloned()
    }

    fn mark_errored(&self, request_id: &str, code: &'static str) {
        let mut requests = self.requests.lock().unwrap();
        if let Some(state) = requests.get_mut(request_id) {
            state.active = false;
            state.error = Some(code);
            if state.finished_at.is_none() {
                state.finished_at = Some(Utc::now().timestamp_millis());
            }
        }
    }
}

async fn run_hint_task(
    handle: &EngineHandle,
    fen: &str,
    moves_uci: Option<&[String]>,
    multipv: u32,
    movetime_ms: u64,
) -> Result<HintOutcome, ClientError> {
    handle
        .set_option_cached("MultiPV", &multipv.to_string())
        .await?;

    let position = match moves_uci {
        Some(moves) if !moves.is_empty() => {
            format!("position startpos moves {}", moves.join(" "))
        }
        _ => format!("position fen {}", fen),
    };
    handle.client.send(&position).await?;

    // Keep the latest line per multipv index.
    let collected: Arc<Mutex<HashMap<u32, HintLine>>> = Arc::new(Mutex::new(HashMap::new()));
    let sink = Arc::clone(&collected);
    let observer = handle.client.add_observer(Box::new(move |line| {
        if let Some((index, parsed)) = parse_multipv_line(line) {
            sink.lock().unwrap().insert(index, parsed);
        }
    }));

    let send_result = handle.client.send(&format!("go movetime {}", movetime_ms)).await;
    let wait_result = match send_result {
        Ok(()) => {
            let deadline = Duration::from_millis((movetime_ms + 4000).max(5000));
            handle
                .client
                .wait_for(|l| l.starts_with("bestmove "), deadline, None)
                .await
        }
        Err(err) => Err(err),
    };
    handle.client.remove_observer(observer);
    wait_result?;

    let mut entries: Vec<(u32, HintLine)> = collected.lock().unwrap().drain().collect();
    entries.sort_by_key(|(index, _)| *index);
    let lines: Vec<HintLine> = entries
        .into_iter()
        .take(multipv as usize)
        .map(|(_, line)| line)
        .collect();
    let best = lines.first().and_then(|l| l.pv_moves.first().cloned());
    Ok(HintOutcome {
        best,
        lines,
        timeout: false,
    })
}

/// Parse depth, score and pv out of an `info` line; `None` when the line
/// carries none of them (e.g. `info string ...`).
pub fn parse_info_line(line: &str) -> Option<LastInfo> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("info") {
        return None;
    }
    let tokens: Vec<&str> = tokens.collect();
    let mut parsed = LastInfo::default();
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                parsed.depth = tokens.get(i + 1).and_then(|v| v.parse().ok());
                i += 2;
            }
            "score" => {
                let kind = tokens.get(i + 1).copied();
                let value = tokens.get(i + 2).and_then(|v| v.parse::<i64>().ok());
                match (kind, value) {
                    (Some(kind), Some(value)) if kind == "cp" || kind == "mate" => {
                        parsed.score = Some(Score {
                            kind: kind.to_string(),
                            value,
                        });
                        i += 3;
                    }
                    _ => i += 1,
                }
            }
            "pv" => {
                parsed.pv = tokens[i + 1..].join(" ");
                break;
            }
            _ => i += 1,
        }
    }
    if parsed.depth.is_none() && parsed.score.is_none() && parsed.pv.is_empty() {
        None
    } else {
        Some(parsed)
    }
}

/// Parse one `info ... multipv K ... pv ...` line into its index and hint
/// entry. Mate scores are projected to ±(100000 - |n|) centipawns so lines
/// stay comparable.
pub fn parse_multipv_line(line: &str) -> Option<(u32, HintLine)> {
    let parsed = parse_info_line(line)?;
    if parsed.pv.is_empty() {
        return None;
    }
    let score = parsed.score?;
    let score_cp = match score.kind.as_str() {
        "mate" => {
            let magnitude = 100_000 - score.value.abs();
            if score.value >= 0 {
                magnitude
            } else {
                -magnitude
            }
        }
        _ => score.value,
    };
    let index = line
        .split_whitespace()
        .collect::<Vec<_>>()
        .windows(2)
        .find(|pair| pair[0] == "multipv")
        .and_then(|pair| pair[1].parse().ok())
        .unwrap_or(1);
    let pv_moves: Vec<String> = parsed.pv.split_whitespace().map(str::to_string).collect();
    let uci = pv_moves.first()?.clone();
    Some((
        index,
        HintLine {
            uci,
            score_cp,
            pv_moves,
        },
    ))
}

/// Request ids adopted from the `x-request-id` header use the caller's
/// value; generated ids are 16 hex characters.
pub fn generate_request_id() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"0123456789abcdef";
    let mut rng = rand::thread_rng();
    (0..16)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
