//! Static evaluation.
//!
//! Material plus positional terms, summed white-positive and then negated
//! for black so the score is always from the side to move's perspective.

mod material;
mod position;

pub use material::material_balance;
pub use position::positional_terms;

use crate::board::{Board, Color};

/// Evaluate the position from the mover's perspective, in centipawns.
pub fn evaluate(board: &Board) -> i32 {
    let score = material_balance(board) + positional_terms(board);
    match board.side {
        Color::White => score,
        Color::Black => -score,
    }
}
