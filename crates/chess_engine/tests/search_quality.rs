//! Search acceptance: forced mates, time discipline and table reuse.

use std::time::Instant;

use chess_engine::board::Board;
use chess_engine::constants::{MATE, MATE_BOUND};
use chess_engine::search::tt::TranspositionTable;
use chess_engine::search::{search, SearchLimits};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn depth_limits(depth: i32) -> SearchLimits {
    SearchLimits {
        depth: Some(depth),
        ..SearchLimits::default()
    }
}

#[test]
fn finds_back_rank_mate_in_one() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    let mut tt = TranspositionTable::new(16);
    let report = search(&mut board, &mut tt, &depth_limits(3));
    assert_eq!(report.best.map(|m| m.uci()), Some("a1a8".to_string()));
    assert_eq!(report.score, MATE - 1);
}

#[test]
fn finds_rook_ladder_mate_in_two() {
    let mut board = Board::from_fen("7k/8/8/8/8/8/R7/1R5K w - - 0 1").unwrap();
    let mut tt = TranspositionTable::new(16);
    let report = search(&mut board, &mut tt, &depth_limits(4));
    assert_eq!(report.score, MATE - 3, "mate in two is three plies");
    let best = report.best.map(|m| m.uci()).unwrap_or_default();
    assert!(
        best == "a2a7" || best == "b1b7",
        "either rook starts the ladder, got {}",
        best
    );
}

#[test]
fn defends_against_mate_by_delaying_it() {
    // Black to move is getting mated; the chosen defense must still be legal
    // and the score must acknowledge the mate.
    let mut board = Board::from_fen("6k1/R7/1R6/8/8/8/8/6K1 b - - 0 1").unwrap();
    let mut tt = TranspositionTable::new(16);
    let report = search(&mut board, &mut tt, &depth_limits(4));
    assert!(report.best.is_some());
    assert!(
        report.score <= -MATE_BOUND,
        "black is lost, got {}",
        report.score
    );
}

#[test]
fn movetime_is_respected() {
    let mut board = Board::from_fen(KIWIPETE).unwrap();
    let mut tt = TranspositionTable::new(16);
    let limits = SearchLimits {
        movetime: Some(150),
        ..SearchLimits::default()
    };
    let started = Instant::now();
    let report = search(&mut board, &mut tt, &limits);
    // One node can overshoot slightly; whole depths cannot.
    assert!(
        started.elapsed().as_millis() < 1500,
        "search ran far past its budget"
    );
    assert!(report.best.is_some());
    assert!(report.nodes > 0);
}

#[test]
fn warm_table_does_not_search_more() {
    let mut board = Board::from_fen(KIWIPETE).unwrap();
    let mut tt = TranspositionTable::new(16);
    let cold = search(&mut board, &mut tt, &depth_limits(4)).nodes;
    let warm = search(&mut board, &mut tt, &depth_limits(4)).nodes;
    assert!(warm <= cold, "warm start searched more: {} > {}", warm, cold);
    assert!(warm > 0);
}

#[test]
fn both_searches_agree_on_the_best_move_after_reuse() {
    let mut board = Board::from_fen(KIWIPETE).unwrap();
    let mut tt = TranspositionTable::new(16);
    let first = search(&mut board, &mut tt, &depth_limits(4));
    let second = search(&mut board, &mut tt, &depth_limits(4));
    assert_eq!(
        first.best.map(|m| m.uci()),
        second.best.map(|m| m.uci()),
        "table reuse changed the move"
    );
}
