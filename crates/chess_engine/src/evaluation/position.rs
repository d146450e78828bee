//! Positional terms, white-positive.
//!
//! Minor-piece centralization, pawn advancement, the bishop pair, pawn
//! structure (doubled and isolated pawns), a castled-king bonus and an
//! early-queen term. All values are centipawns.

use crate::board::{file_of, rank_of, Board};
use crate::constants::*;

/// d4, e4, d5, e5.
const CENTER: [u8; 4] = [27, 28, 35, 36];

const CENTRALIZATION_STEP: i32 = 2;
const PAWN_ADVANCE_STEP: i32 = 3;
const PAWN_CENTER_FILE_STEP: i32 = 2;
const BISHOP_PAIR: i32 = 25;
const DOUBLED_PAWN: i32 = 10;
const ISOLATED_PAWN: i32 = 8;
const KING_SAFETY: i32 = 18;
const EARLY_QUEEN: i32 = 8;

/// Manhattan distance to the nearest of the four center squares.
fn center_distance(sq: u8) -> i32 {
    CENTER
        .iter()
        .map(|&c| {
            (file_of(sq) as i32 - file_of(c) as i32).abs()
                + (rank_of(sq) as i32 - rank_of(c) as i32).abs()
        })
        .min()
        .unwrap_or(0)
}

fn centralization(sq: u8) -> i32 {
    (6 - center_distance(sq)).max(0) * CENTRALIZATION_STEP
}

fn pawn_advance(sq: u8, white: bool) -> i32 {
    let steps = if white {
        rank_of(sq) as i32 - 1
    } else {
        6 - rank_of(sq) as i32
    };
    let file = file_of(sq);
    let mut bonus = steps * PAWN_ADVANCE_STEP;
    if file == 3 || file == 4 {
        bonus += steps * PAWN_CENTER_FILE_STEP;
    }
    bonus
}

pub fn positional_terms(board: &Board) -> i32 {
    let mut score = 0i32;
    let mut pawns = [[0i32; 8]; 2];
    let mut bishops = [0i32; 2];

    for sq in 0..64u8 {
        let piece = board.squares[sq as usize];
        if piece == 0 {
            continue;
        }
        let white = piece > 0;
        let sign = if white { 1 } else { -1 };
        match piece.abs() {
            KNIGHT => score += sign * centralization(sq),
            BISHOP => {
                score += sign * centralization(sq);
                bishops[usize::from(!white)] += 1;
            }
            PAWN => {
                score += sign * pawn_advance(sq, white);
                pawns[usize::from(!white)][file_of(sq) as usize] += 1;
            }
            _ => {}
        }
    }

    for (color, sign) in [(0usize, 1i32), (1, -1)] {
        if bishops[color] >= 2 {
            score += sign * BISHOP_PAIR;
        }
        for file in 0..8usize {
            let count = pawns[color][file];
            if count > 1 {
                score -= sign * DOUBLED_PAWN * (count - 1);
            }
            if count > 0 {
                let left = if file > 0 { pawns[color][file - 1] } else { 0 };
                let right = if file < 7 { pawns[color][file + 1] } else { 0 };
                if left == 0 && right == 0 {
                    score -= sign * ISOLATED_PAWN;
                }
            }
        }
    }

    score += king_safety(board, true);
    score -= king_safety(board, false);
    score += early_queen(board, true);
    score -= early_queen(board, false);

    score
}

/// +18 once the king has reached a castled square, -18 for a king still in
/// the middle after move 10.
fn king_safety(board: &Board, white: bool) -> i32 {
    let (king, castled) = if white {
        (KING, [6u8, 2u8])
    } else {
        (-KING, [62u8, 58u8])
    };
    let Some(sq) = board.squares.iter().position(|&p| p == king) else {
        return 0;
    };
    if castled.contains(&(sq as u8)) {
        KING_SAFETY
    } else if board.fullmove >= 10 {
        -KING_SAFETY
    } else {
        0
    }
}

fn early_queen(board: &Board, white: bool) -> i32 {
    if board.fullmove > 8 {
        return 0;
    }
    let (queen, home) = if white { (QUEEN, 3usize) } else { (-QUEEN, 59) };
    if board.squares[home] == queen {
        -EARLY_QUEEN
    } else {
        0
    }
}
