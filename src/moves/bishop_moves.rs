use crate::game_state::chess_types::{Board, Square};
use crate::moves::movement_patterns::is_path_clear;

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let d_rank = (to.rank() as i8 - from.rank() as i8).abs();
    let d_file = (to.file() as i8 - from.file() as i8).abs();
    d_rank == d_file && d_rank != 0
}

pub fn bishop_move_allowed(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && is_path_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::bishop_move_allowed;
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

    #[test]
    fn blocked_diagonal_is_rejected() {
        let mut board = Board::empty();
        let c1 = Square::new(0, 2).expect("c1");
        let e3 = Square::new(2, 4).expect("e3");
        let h6 = Square::new(5, 7).expect("h6");
        assert!(bishop_move_allowed(&board, c1, h6));

        board.set(e3, Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(bishop_move_allowed(&board, c1, e3));
        assert!(!bishop_move_allowed(&board, c1, h6));
        assert!(!bishop_move_allowed(&board, c1, Square::new(0, 5).expect("f1")));
    }
}
