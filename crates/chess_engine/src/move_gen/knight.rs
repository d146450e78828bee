//! Knight move generation via the precomputed step table.

use super::tables::KNIGHT_STEPS;
use crate::board::{belongs_to, Board};
use crate::moves::Move;

pub fn generate(board: &Board, from: u8, moves: &mut Vec<Move>) {
    let us = board.side;
    for &to in &KNIGHT_STEPS[from as usize] {
        let target = board.squares[to as usize];
        if target == 0 {
            moves.push(Move::quiet(from, to));
        } else if belongs_to(target, us.opponent()) {
            moves.push(Move::capture(from, to));
        }
    }
}
