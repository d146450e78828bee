//! Pawn move generation: pushes, double pushes, captures, en passant and
//! promotion expansion.

use super::tables::PAWN_ATTACKS;
use crate::board::{belongs_to, rank_of, Board, Color};
use crate::constants::*;
use crate::moves::Move;

const PROMO_PIECES: [i8; 4] = [QUEEN, ROOK, BISHOP, KNIGHT];

fn push_promotions(moves: &mut Vec<Move>, from: u8, to: u8, base_flags: u8) {
    for promo in PROMO_PIECES {
        moves.push(Move::new(from, to, promo, base_flags | Move::PROMOTION));
    }
}

pub fn generate(board: &Board, from: u8, moves: &mut Vec<Move>) {
    let us = board.side;
    let (forward, start_rank, promo_rank): (i32, u8, u8) = match us {
        Color::White => (8, 1, 7),
        Color::Black => (-8, 6, 0),
    };

    let one = from as i32 + forward;
    if (0..64).contains(&one) && board.squares[one as usize] == 0 {
        if rank_of(one as u8) == promo_rank {
            push_promotions(moves, from, one as u8, 0);
        } else {
            moves.push(Move::quiet(from, one as u8));
            if rank_of(from) == start_rank {
                let two = one + forward;
                if board.squares[two as usize] == 0 {
                    moves.push(Move::new(from, two as u8, EMPTY, Move::DOUBLE_PUSH));
                }
            }
        }
    }

    for &to in &PAWN_ATTACKS[us.index()][from as usize] {
        let target = board.squares[to as usize];
        if target != 0 && belongs_to(target, us.opponent()) {
            if rank_of(to) == promo_rank {
                push_promotions(moves, from, to, Move::CAPTURE);
            } else {
                moves.push(Move::capture(from, to));
            }
        }
        if board.ep == Some(to) {
            moves.push(Move::new(
                from,
                to,
                EMPTY,
                Move::EN_PASSANT | Move::CAPTURE,
            ));
        }
    }
}
