//! Square-attack oracle.
//!
//! Reverse-checks the attackers of a target square: pawns by their two
//! capture origins, knights and kings by step table, then sliders along the
//! rook and bishop rays. Returns on the first attacker found, which keeps
//! the common not-in-check case cheap.

use super::tables::{BISHOP_DIRS, KING_STEPS, KNIGHT_STEPS, ROOK_DIRS};
use crate::board::{belongs_to, file_of, on_board, rank_of, square_at, Board, Color};
use crate::constants::*;

/// Is `target` attacked by any piece of `by`?
pub fn is_square_attacked(board: &Board, target: u8, by: Color) -> bool {
    let tf = file_of(target) as i32;
    let tr = rank_of(target) as i32;

    // A pawn of `by` attacks the target from one rank behind it.
    let pawn = PAWN * by.sign();
    let pawn_rank = match by {
        Color::White => tr - 1,
        Color::Black => tr + 1,
    };
    for df in [-1, 1] {
        if on_board(tf + df, pawn_rank)
            && board.squares[square_at(tf + df, pawn_rank) as usize] == pawn
        {
            return true;
        }
    }

    for &sq in &KNIGHT_STEPS[target as usize] {
        let piece = board.squares[sq as usize];
        if piece.abs() == KNIGHT && belongs_to(piece, by) {
            return true;
        }
    }

    for &sq in &KING_STEPS[target as usize] {
        let piece = board.squares[sq as usize];
        if piece.abs() == KING && belongs_to(piece, by) {
            return true;
        }
    }

    for (dirs, diagonal) in [(&ROOK_DIRS, false), (&BISHOP_DIRS, true)] {
        for &(df, dr) in dirs {
            let mut f = tf + df;
            let mut r = tr + dr;
            while on_board(f, r) {
                let piece = board.squares[square_at(f, r) as usize];
                if piece != 0 {
                    if belongs_to(piece, by) {
                        let kind = piece.abs();
                        if kind == QUEEN || kind == if diagonal { BISHOP } else { ROOK } {
                            return true;
                        }
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
    }

    false
}

/// Is `color`'s king currently attacked?
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opponent()),
        None => false,
    }
}
