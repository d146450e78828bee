//! King move generation, including castling.
//!
//! Castling is emitted only when the right is still set, the squares between
//! king and rook are empty, the rook is on its original square, the king is
//! not in check, and neither the transit nor the destination square is
//! attacked by the opponent.

use super::attack::is_square_attacked;
use super::tables::KING_STEPS;
use crate::board::{belongs_to, Board, Color};
use crate::constants::*;
use crate::moves::Move;

pub fn generate(board: &Board, from: u8, moves: &mut Vec<Move>) {
    let us = board.side;
    for &to in &KING_STEPS[from as usize] {
        let target = board.squares[to as usize];
        if target == 0 {
            moves.push(Move::quiet(from, to));
        } else if belongs_to(target, us.opponent()) {
            moves.push(Move::capture(from, to));
        }
    }

    let (home, kingside, queenside, rook) = match us {
        Color::White => (4u8, CASTLE_WK, CASTLE_WQ, ROOK),
        Color::Black => (60u8, CASTLE_BK, CASTLE_BQ, -ROOK),
    };
    if from != home || board.castling & (kingside | queenside) == 0 {
        return;
    }
    let them = us.opponent();
    if is_square_attacked(board, home, them) {
        return;
    }

    let sq = |offset: i8| (home as i8 + offset) as u8;
    if board.castling & kingside != 0
        && board.squares[sq(1) as usize] == 0
        && board.squares[sq(2) as usize] == 0
        && board.squares[sq(3) as usize] == rook
        && !is_square_attacked(board, sq(1), them)
        && !is_square_attacked(board, sq(2), them)
    {
        moves.push(Move::new(home, sq(2), EMPTY, Move::CASTLE));
    }
    if board.castling & queenside != 0
        && board.squares[sq(-1) as usize] == 0
        && board.squares[sq(-2) as usize] == 0
        && board.squares[sq(-3) as usize] == 0
        && board.squares[sq(-4) as usize] == rook
        && !is_square_attacked(board, sq(-1), them)
        && !is_square_attacked(board, sq(-2), them)
    {
        moves.push(Move::new(home, sq(-2), EMPTY, Move::CASTLE));
    }
}
