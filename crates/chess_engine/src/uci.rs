//! UCI front-end.
//!
//! Reads one command per line from stdin and finishes each command's
//! observable output before reading the next, so lines from two searches can
//! never interleave. The front-end also keeps the played-move history that
//! feeds the opening book, and gates book moves behind tactical safety
//! checks before they reach the wire.

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::book::{is_early_queen_move, OpeningBook, WeightedBook};
use crate::constants::*;
use crate::move_gen::{generate_legal, in_check, move_from_uci};
use crate::moves::Move;
use crate::perft::{divide, perft};
use crate::search::tt::TranspositionTable;
use crate::search::{search, SearchLimits, Searcher};

const ENGINE_NAME: &str = "XFChess Engine";
const ENGINE_AUTHOR: &str = "the XFChess developers";

const DEFAULT_HASH_MB: usize = 64;
const MIN_HASH_MB: usize = 1;
const MAX_HASH_MB: usize = 2048;

/// Book moves are only considered this early in the game.
const BOOK_MAX_PLIES: usize = 12;

pub struct UciEngine {
    board: Board,
    tt: TranspositionTable,
    book: WeightedBook,
    /// Applied moves since the base position, in UCI notation.
    move_history: Vec<String>,
    /// The history keys book lines only when play started from startpos.
    book_eligible: bool,
    hash_mb: usize,
}

impl Default for UciEngine {
    fn default() -> Self {
        UciEngine::new()
    }
}

impl UciEngine {
    pub fn new() -> UciEngine {
        UciEngine {
            board: Board::startpos(),
            tt: TranspositionTable::new(DEFAULT_HASH_MB),
            book: WeightedBook,
            move_history: Vec::new(),
            book_eligible: true,
            hash_mb: DEFAULT_HASH_MB,
        }
    }

    /// Run the command loop until `quit` or EOF.
    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.handle_command(line) {
                break;
            }
            let _ = stdout.flush();
        }
    }

    /// Returns false when the engine should terminate.
    pub fn handle_command(&mut self, line: &str) -> bool {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "uci" => {
                println!("id name {}", ENGINE_NAME);
                println!("id author {}", ENGINE_AUTHOR);
                println!(
                    "option name Hash type spin default {} min {} max {}",
                    DEFAULT_HASH_MB, MIN_HASH_MB, MAX_HASH_MB
                );
                println!("option name Threads type spin default 1 min 1 max 32");
                println!("uciok");
            }
            "isready" => println!("readyok"),
            "ucinewgame" => {
                self.board = Board::startpos();
                self.move_history.clear();
                self.book_eligible = true;
                self.tt.clear();
            }
            "position" => self.cmd_position(&parts),
            "setoption" => self.cmd_setoption(&parts),
            "go" => self.cmd_go(&parts),
            "perft" => {
                if let Some(depth) = parts.get(1).and_then(|d| d.parse().ok()) {
                    let mut scratch = self.board.clone();
                    let nodes = perft(&mut scratch, depth);
                    println!("info string perft({})={}", depth, nodes);
                }
            }
            "divide" => {
                if let Some(depth) = parts.get(1).and_then(|d| d.parse().ok()) {
                    let mut scratch = self.board.clone();
                    divide(&mut scratch, depth);
                }
            }
            "quit" => return false,
            _ => {}
        }
        true
    }

    fn cmd_position(&mut self, parts: &[&str]) {
        let mut index = 1;
        match parts.get(index) {
            Some(&"startpos") => {
                self.board = Board::startpos();
                self.book_eligible = true;
                index += 1;
            }
            Some(&"fen") => {
                if parts.len() < index + 7 {
                    return;
                }
                let fen = parts[index + 1..index + 7].join(" ");
                match Board::from_fen(&fen) {
                    Ok(board) => {
                        self.book_eligible = fen == START_FEN;
                        self.board = board;
                    }
                    Err(err) => {
                        println!("info string rejected position: {}", err);
                        return;
                    }
                }
                index += 7;
            }
            _ => return,
        }
        self.move_history.clear();

        if parts.get(index) == Some(&"moves") {
            for uci in &parts[index + 1..] {
                match move_from_uci(&mut self.board, uci) {
                    Some(m) => {
                        self.board.make_move(m);
                        self.move_history.push(m.uci());
                    }
                    None => {
                        println!("info string rejected move: {}", uci);
                        break;
                    }
                }
            }
        }
    }

    fn cmd_setoption(&mut self, parts: &[&str]) {
        // setoption name <tokens> value <n>
        let Some(name_at) = parts.iter().position(|&t| t == "name") else {
            return;
        };
        let value_at = parts.iter().position(|&t| t == "value");
        let name = parts[name_at + 1..value_at.unwrap_or(parts.len())].join(" ");
        let value = value_at.and_then(|at| parts.get(at + 1));
        if name.eq_ignore_ascii_case("hash") {
            if let Some(mb) = value.and_then(|v| v.parse::<usize>().ok()) {
                self.hash_mb = mb.clamp(MIN_HASH_MB, MAX_HASH_MB);
                self.tt.resize(self.hash_mb);
            }
        }
        // Threads is accepted for compatibility; the search is single-threaded.
    }

    fn cmd_go(&mut self, parts: &[&str]) {
        let limits = parse_go(parts);

        if let Some(book_move) = self.book_move() {
            println!("info string bookhit move={}", book_move.uci());
            println!("bestmove {}", book_move.uci());
            return;
        }

        let mut searcher = Searcher::new(&mut self.board, &mut self.tt);
        searcher.report = true;
        let report = searcher.run(&limits);
        match report.best {
            Some(m) => println!("bestmove {}", m.uci()),
            None => println!("bestmove 0000"),
        }
    }

    /// The book move, if one exists and passes the safety gates: the game is
    /// still early, there are no tactics on the board (no check, no capture
    /// or promotion available), the move is not an early queen sortie, and
    /// the mover's king stays safe after it.
    fn book_move(&mut self) -> Option<Move> {
        if !self.book_eligible || self.move_history.len() > BOOK_MAX_PLIES {
            return None;
        }
        let legal = generate_legal(&mut self.board);
        if legal.is_empty() {
            return None;
        }
        if in_check(&self.board, self.board.side) {
            return None;
        }
        if legal.iter().any(|m| m.is_capture() || m.is_promotion()) {
            return None;
        }
        let legal_uci: Vec<String> = legal.iter().map(Move::uci).collect();
        let pick = self.book.pick(&self.move_history, &legal_uci)?;
        if is_early_queen_move(&pick, self.move_history.len()) {
            return None;
        }
        let mover = self.board.side;
        let m = *legal.iter().find(|m| m.uci() == pick)?;
        let undo = self.board.make_move(m);
        let safe = !in_check(&self.board, mover);
        self.board.unmake_move(m, &undo);
        safe.then_some(m)
    }

    /// Run a `go` search without printing, for tests and diagnostics.
    pub fn best_move(&mut self, limits: &SearchLimits) -> Option<Move> {
        if let Some(book_move) = self.book_move() {
            return Some(book_move);
        }
        search(&mut self.board, &mut self.tt, limits).best
    }
}

fn parse_go(parts: &[&str]) -> SearchLimits {
    let mut limits = SearchLimits::default();
    let mut iter = parts.iter().skip(1);
    while let Some(&token) = iter.next() {
        let value = iter.next().and_then(|v| v.parse::<u64>().ok());
        match token {
            "depth" => limits.depth = value.map(|v| v as i32),
            "movetime" => limits.movetime = value,
            "wtime" => limits.wtime = value,
            "btime" => limits.btime = value,
            "winc" => limits.winc = value,
            "binc" => limits.binc = value,
            _ => {}
        }
    }
    limits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_go_reads_all_limit_kinds() {
        let limits = parse_go(&["go", "depth", "6", "movetime", "250"]);
        assert_eq!(limits.depth, Some(6));
        assert_eq!(limits.movetime, Some(250));

        let limits = parse_go(&[
            "go", "wtime", "60000", "btime", "50000", "winc", "1000", "binc", "900",
        ]);
        assert_eq!(limits.wtime, Some(60000));
        assert_eq!(limits.btime, Some(50000));
        assert_eq!(limits.winc, Some(1000));
        assert_eq!(limits.binc, Some(900));
    }

    #[test]
    fn position_startpos_moves_matches_fen() {
        let mut engine = UciEngine::new();
        engine.handle_command("position startpos moves e2e4 e7e5 g1f3");
        let by_moves = engine.board.to_fen();

        let mut engine = UciEngine::new();
        engine.handle_command(
            "position fen rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
        );
        assert_eq!(by_moves, engine.board.to_fen());
        assert!(!engine.book_eligible, "arbitrary FEN leaves the book");
    }

    #[test]
    fn position_records_history_for_the_book() {
        let mut engine = UciEngine::new();
        engine.handle_command("position startpos moves e2e4 c7c6");
        assert_eq!(engine.move_history, vec!["e2e4", "c7c6"]);
        assert!(engine.book_eligible);
    }

    #[test]
    fn setoption_resizes_hash() {
        let mut engine = UciEngine::new();
        let before = engine.tt.len();
        engine.handle_command("setoption name Hash value 1");
        assert!(engine.tt.len() < before);
        // Clamped rather than rejected.
        engine.handle_command("setoption name Hash value 0");
        assert_eq!(engine.hash_mb, MIN_HASH_MB);
    }

    #[test]
    fn book_move_from_startpos_is_legal_and_announced_early_only() {
        let mut engine = UciEngine::new();
        engine.handle_command("position startpos");
        let m = engine.book_move().expect("startpos is in book");
        assert_eq!(m.uci(), "e2e4");
    }

    #[test]
    fn book_is_skipped_when_captures_exist() {
        let mut engine = UciEngine::new();
        // After 1.e4 d5 white has exd5 available: tactics gate closes.
        engine.handle_command("position startpos moves e2e4 d7d5");
        assert!(engine.book_move().is_none());
    }

    #[test]
    fn book_is_skipped_in_check() {
        let mut engine = UciEngine::new();
        // 1.e4 e5 2.f4 Qh4+ puts white in check inside book depth.
        engine.handle_command("position startpos moves e2e4 e7e5 f2f4 d8h4");
        assert!(engine.book_move().is_none());
    }

    #[test]
    fn book_is_skipped_from_arbitrary_fen() {
        let mut engine = UciEngine::new();
        engine.handle_command("position fen 4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(engine.book_move().is_none());
    }

    #[test]
    fn terminal_position_best_move_is_none() {
        let mut engine = UciEngine::new();
        engine.handle_command("position fen 7k/5Q2/5K2/8/8/8/8/8 b - - 0 1");
        let limits = SearchLimits {
            depth: Some(2),
            ..SearchLimits::default()
        };
        assert!(engine.best_move(&limits).is_none());
    }

    #[test]
    fn promotion_bestmove_carries_a_letter() {
        let mut engine = UciEngine::new();
        engine.handle_command("position fen 4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let limits = SearchLimits {
            depth: Some(2),
            ..SearchLimits::default()
        };
        let m = engine.best_move(&limits).expect("white has moves");
        if m.is_promotion() {
            assert_eq!(m.uci().len(), 5, "promotion moves spell the piece");
        }
    }
}
