//! UCI protocol tests against the real engine binary over stdio.

mod common;

use std::time::Duration;

use chess_engine::board::Board;
use chess_engine::move_gen::generate_legal;
use chess_engine::moves::Move;
use common::EngineProcess;

#[test]
fn handshake_reports_identity_and_options() {
    let mut engine = EngineProcess::start();
    engine.send("uci");
    assert!(engine
        .expect_line(|l| l.starts_with("id name"), Duration::from_secs(5))
        .is_some());
    let hash = engine
        .expect_line(
            |l| l.starts_with("option name Hash type spin"),
            Duration::from_secs(5),
        )
        .expect("Hash option advertised");
    assert!(hash.contains("default 64"));
    assert!(hash.contains("max 2048"));
    assert!(engine
        .expect_line(|l| l == "uciok", Duration::from_secs(5))
        .is_some());
}

#[test]
fn bestmove_from_startpos_is_legal() {
    let mut engine = EngineProcess::start();
    engine.handshake();
    let uci = engine
        .bestmove("position startpos", "go movetime 200", Duration::from_secs(10))
        .expect("engine answers go");
    let mut board = Board::startpos();
    let legal: Vec<String> = generate_legal(&mut board).iter().map(Move::uci).collect();
    assert!(legal.contains(&uci), "bestmove {} not legal", uci);
}

#[test]
fn startpos_is_answered_from_the_book() {
    let mut engine = EngineProcess::start();
    engine.handshake();
    engine.send("position startpos");
    engine.send("go movetime 100");
    let bookhit = engine
        .expect_line(
            |l| l.starts_with("info string bookhit move="),
            Duration::from_secs(5),
        )
        .expect("book answers the start position");
    assert!(bookhit.ends_with("move=e2e4"));
    let best = engine
        .expect_line(|l| l.starts_with("bestmove "), Duration::from_secs(5))
        .expect("bestmove follows the bookhit");
    assert_eq!(best, "bestmove e2e4");
}

#[test]
fn search_emits_info_lines_before_bestmove() {
    let mut engine = EngineProcess::start();
    engine.handshake();
    // Out-of-book position so the search actually runs.
    engine.send("position fen r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    engine.send("go movetime 150");
    let info = engine
        .expect_line(|l| l.starts_with("info depth "), Duration::from_secs(5))
        .expect("at least one info line");
    assert!(info.contains("score"), "info line carries a score: {}", info);
    assert!(info.contains("nodes"), "info line carries nodes: {}", info);
    assert!(info.contains("nps"), "info line carries nps: {}", info);
    assert!(engine
        .expect_line(|l| l.starts_with("bestmove "), Duration::from_secs(10))
        .is_some());
}

#[test]
fn mated_position_returns_0000() {
    let mut engine = EngineProcess::start();
    engine.handshake();
    let uci = engine
        .bestmove(
            "position fen 7k/6Q1/5K2/8/8/8/8/8 b - - 0 1",
            "go movetime 100",
            Duration::from_secs(10),
        )
        .expect("engine answers go");
    assert_eq!(uci, "0000");
}

#[test]
fn stalemate_returns_0000() {
    let mut engine = EngineProcess::start();
    engine.handshake();
    let uci = engine
        .bestmove(
            "position fen 7k/5Q2/5K2/8/8/8/8/8 b - - 0 1",
            "go movetime 100",
            Duration::from_secs(10),
        )
        .expect("engine answers go");
    assert_eq!(uci, "0000");
}

#[test]
fn position_moves_are_replayed() {
    let mut engine = EngineProcess::start();
    engine.handshake();
    // After 1.e4 e5 the reply must be legal in that position, not at start.
    let uci = engine
        .bestmove(
            "position startpos moves e2e4 e7e5",
            "go movetime 150",
            Duration::from_secs(10),
        )
        .expect("engine answers go");
    let mut board =
        Board::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2").unwrap();
    let legal: Vec<String> = generate_legal(&mut board).iter().map(Move::uci).collect();
    assert!(legal.contains(&uci), "reply {} not legal after 1.e4 e5", uci);
}

#[test]
fn in_loop_perft_reports_node_count() {
    let mut engine = EngineProcess::start();
    engine.handshake();
    engine.send("position startpos");
    engine.send("perft 3");
    let line = engine
        .expect_line(
            |l| l.starts_with("info string perft(3)="),
            Duration::from_secs(30),
        )
        .expect("perft answers");
    assert_eq!(line, "info string perft(3)=8902");
}

#[test]
fn ucinewgame_resets_to_startpos() {
    let mut engine = EngineProcess::start();
    engine.handshake();
    engine.send("position fen 7k/5Q2/5K2/8/8/8/8/8 b - - 0 1");
    engine.send("ucinewgame");
    engine.send("isready");
    assert!(engine
        .expect_line(|l| l == "readyok", Duration::from_secs(5))
        .is_some());
    // Back at the start position the book answers again.
    let uci = engine
        .bestmove("position startpos", "go movetime 100", Duration::from_secs(10))
        .expect("engine answers go");
    assert_ne!(uci, "0000");
}
