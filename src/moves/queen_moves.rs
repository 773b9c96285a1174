use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::bishop_move_allowed;
use crate::moves::rook_moves::rook_move_allowed;

#[inline]
pub fn queen_move_allowed(board: &Board, from: Square, to: Square) -> bool {
    rook_move_allowed(board, from, to) || bishop_move_allowed(board, from, to)
}
