//! Engine binary: UCI mode by default, perft diagnostics via CLI arguments.
//!
//! ```text
//! chess_engine                      # UCI on stdio
//! chess_engine perft 5              # node count from startpos
//! chess_engine perftfen "<fen>" 5   # node count from a FEN
//! chess_engine divide 3             # per-move node counts from startpos
//! chess_engine dividefen "<fen>" 3  # per-move node counts from a FEN
//! ```

use std::process::ExitCode;
use std::time::Instant;

use chess_engine::board::Board;
use chess_engine::perft::{divide, perft};
use chess_engine::uci::UciEngine;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        UciEngine::new().run();
        return ExitCode::SUCCESS;
    }

    match run_diagnostic(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!(
                "usage: chess_engine [perft N | perftfen <fen> N | divide N | dividefen <fen> N]"
            );
            ExitCode::from(2)
        }
    }
}

fn run_diagnostic(args: &[String]) -> Result<(), String> {
    let parse_depth = |arg: Option<&String>| -> Result<u32, String> {
        arg.and_then(|d| d.parse().ok())
            .ok_or_else(|| "missing or invalid depth".to_string())
    };

    match args[0].as_str() {
        "perft" => {
            let depth = parse_depth(args.get(1))?;
            let mut board = Board::startpos();
            run_perft(&mut board, depth, "perft");
            Ok(())
        }
        "perftfen" => {
            let fen = args.get(1).ok_or("missing FEN")?;
            let depth = parse_depth(args.get(2))?;
            let mut board = Board::from_fen(fen).map_err(|e| e.to_string())?;
            run_perft(&mut board, depth, "perftfen");
            Ok(())
        }
        "divide" => {
            let depth = parse_depth(args.get(1))?;
            let mut board = Board::startpos();
            divide(&mut board, depth);
            Ok(())
        }
        "dividefen" => {
            let fen = args.get(1).ok_or("missing FEN")?;
            let depth = parse_depth(args.get(2))?;
            let mut board = Board::from_fen(fen).map_err(|e| e.to_string())?;
            divide(&mut board, depth);
            Ok(())
        }
        other => Err(format!("unknown command: {}", other)),
    }
}

fn run_perft(board: &mut Board, depth: u32, label: &str) {
    let started = Instant::now();
    let nodes = perft(board, depth);
    let ms = started.elapsed().as_secs_f64() * 1000.0;
    println!("{}({}) = {}  [{:.1} ms]", label, depth, nodes, ms);
}
