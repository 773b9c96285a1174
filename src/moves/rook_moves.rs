use crate::game_state::chess_types::{Board, Square};
use crate::moves::movement_patterns::is_path_clear;

#[inline]
pub fn is_orthogonal(from: Square, to: Square) -> bool {
    (from.rank() == to.rank()) != (from.file() == to.file())
}

pub fn rook_move_allowed(board: &Board, from: Square, to: Square) -> bool {
    is_orthogonal(from, to) && is_path_clear(board, from, to)
}
