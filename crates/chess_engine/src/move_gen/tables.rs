//! Precomputed step tables.
//!
//! Knight and king destinations and pawn attack squares are fixed per square,
//! so they are computed once and reused by both move generation and the
//! attack oracle.

use once_cell::sync::Lazy;

use crate::board::{file_of, on_board, rank_of, square_at};

/// Rook ray directions as (file, rank) deltas.
pub const ROOK_DIRS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
/// Bishop ray directions as (file, rank) deltas.
pub const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

fn steps_from(sq: u8, deltas: &[(i32, i32)]) -> Vec<u8> {
    let file = file_of(sq) as i32;
    let rank = rank_of(sq) as i32;
    deltas
        .iter()
        .filter(|(df, dr)| on_board(file + df, rank + dr))
        .map(|(df, dr)| square_at(file + df, rank + dr))
        .collect()
}

pub static KNIGHT_STEPS: Lazy<[Vec<u8>; 64]> =
    Lazy::new(|| std::array::from_fn(|sq| steps_from(sq as u8, &KNIGHT_DELTAS)));

pub static KING_STEPS: Lazy<[Vec<u8>; 64]> = Lazy::new(|| {
    let deltas: Vec<(i32, i32)> = (-1..=1)
        .flat_map(|df| (-1..=1).map(move |dr| (df, dr)))
        .filter(|&(df, dr)| df != 0 || dr != 0)
        .collect();
    std::array::from_fn(|sq| steps_from(sq as u8, &deltas))
});

/// Squares attacked *from* a square by a pawn of each color; index 0 = white.
pub static PAWN_ATTACKS: Lazy<[[Vec<u8>; 64]; 2]> = Lazy::new(|| {
    [
        std::array::from_fn(|sq| steps_from(sq as u8, &[(-1, 1), (1, 1)])),
        std::array::from_fn(|sq| steps_from(sq as u8, &[(-1, -1), (1, -1)])),
    ]
});
