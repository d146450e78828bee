//! Material balance in centipawns, white-positive.

use crate::board::Board;
use crate::constants::FIGURE_VALUE;

pub fn material_balance(board: &Board) -> i32 {
    let mut score = 0;
    for &piece in &board.squares {
        if piece != 0 {
            let value = FIGURE_VALUE[piece.unsigned_abs() as usize];
            score += if piece > 0 { value } else { -value };
        }
    }
    score
}
