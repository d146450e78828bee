//! Perft: exact legal-move node counts for move generator validation.

use crate::board::Board;
use crate::move_gen::generate_legal;

pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for m in generate_legal(board) {
        let undo = board.make_move(m);
        nodes += perft(board, depth - 1);
        board.unmake_move(m, &undo);
    }
    nodes
}

/// Per-root-move node counts, printed one `<uci>: <nodes>` line at a time,
/// followed by the total. Returns the total.
pub fn divide(board: &mut Board, depth: u32) -> u64 {
    let mut total = 0;
    for m in generate_legal(board) {
        let undo = board.make_move(m);
        let nodes = if depth > 0 { perft(board, depth - 1) } else { 1 };
        board.unmake_move(m, &undo);
        println!("{}: {}", m.uci(), nodes);
        total += nodes;
    }
    println!("Total: {}", total);
    total
}
