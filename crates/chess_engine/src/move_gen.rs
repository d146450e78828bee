//! Move generation.
//!
//! `generate_pseudo_legal` walks the board and emits moves per piece kind;
//! `generate_legal` filters them with a trial make/unmake, keeping only moves
//! that do not leave the mover's own king attacked.

pub mod attack;
mod king;
mod knight;
mod pawn;
mod sliding;
pub mod tables;

pub use attack::{in_check, is_square_attacked};

use crate::board::{belongs_to, Board};
use crate::constants::*;
use crate::moves::{parse_uci, Move};

pub fn generate_pseudo_legal(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    let us = board.side;
    for from in 0..64u8 {
        let piece = board.squares[from as usize];
        if !belongs_to(piece, us) {
            continue;
        }
        match piece.abs() {
            PAWN => pawn::generate(board, from, &mut moves),
            KNIGHT => knight::generate(board, from, &mut moves),
            BISHOP | ROOK | QUEEN => sliding::generate(board, from, &mut moves),
            KING => king::generate(board, from, &mut moves),
            _ => {}
        }
    }
    moves
}

pub fn generate_legal(board: &mut Board) -> Vec<Move> {
    let us = board.side;
    generate_pseudo_legal(board)
        .into_iter()
        .filter(|&m| {
            let undo = board.make_move(m);
            let legal = !in_check(board, us);
            board.unmake_move(m, &undo);
            legal
        })
        .collect()
}

/// Resolve a UCI move string against the current legal moves.
///
/// A promotion push without a letter resolves to the queen promotion, which
/// is how clients that omit the suffix are accommodated.
pub fn move_from_uci(board: &mut Board, uci: &str) -> Option<Move> {
    let (from, to, promo) = parse_uci(uci)?;
    let legal = generate_legal(board);
    let candidates: Vec<Move> = legal
        .into_iter()
        .filter(|m| m.from == from && m.to == to)
        .collect();
    if promo != EMPTY {
        return candidates.into_iter().find(|m| m.promo == promo);
    }
    if let Some(&plain) = candidates.iter().find(|m| !m.is_promotion()) {
        return Some(plain);
    }
    candidates.into_iter().find(|m| m.promo == QUEEN)
}
