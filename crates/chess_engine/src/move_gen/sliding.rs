//! Sliding piece move generation: bishops, rooks and queens.
//!
//! Rays run from the source square until the board edge or a blocker; an
//! enemy blocker terminates the ray with a capture.

use super::tables::{BISHOP_DIRS, ROOK_DIRS};
use crate::board::{belongs_to, file_of, on_board, rank_of, square_at, Board};
use crate::constants::*;
use crate::moves::Move;

pub fn generate(board: &Board, from: u8, moves: &mut Vec<Move>) {
    let kind = board.squares[from as usize].abs();
    if kind == BISHOP || kind == QUEEN {
        slide(board, from, &BISHOP_DIRS, moves);
    }
    if kind == ROOK || kind == QUEEN {
        slide(board, from, &ROOK_DIRS, moves);
    }
}

fn slide(board: &Board, from: u8, dirs: &[(i32, i32)], moves: &mut Vec<Move>) {
    let us = board.side;
    for &(df, dr) in dirs {
        let mut f = file_of(from) as i32 + df;
        let mut r = rank_of(from) as i32 + dr;
        while on_board(f, r) {
            let to = square_at(f, r);
            let target = board.squares[to as usize];
            if target == 0 {
                moves.push(Move::quiet(from, to));
            } else {
                if belongs_to(target, us.opponent()) {
                    moves.push(Move::capture(from, to));
                }
                break;
            }
            f += df;
            r += dr;
        }
    }
}
