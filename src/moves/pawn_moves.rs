//! Pawn movement: single and double pushes, diagonal captures, en passant.

use crate::game_state::chess_types::{Board, Color, PieceKind, Square};

/// Pseudo-legal pawn transition for a pawn of `color` standing on `from`.
///
/// `en_passant` is the current en-passant target, if the side moving is
/// entitled to use it.
pub fn pawn_move_allowed(
    board: &Board,
    from: Square,
    to: Square,
    color: Color,
    en_passant: Option<Square>,
) -> bool {
    let dir = color.forward();
    let d_rank = to.rank() as i8 - from.rank() as i8;
    let d_file = to.file() as i8 - from.file() as i8;

    if d_file == 0 {
        if d_rank == dir {
            return board.is_empty(to);
        }
        if d_rank == 2 * dir && from.rank() == color.pawn_start_rank() {
            return from
                .offset(dir, 0)
                .is_some_and(|middle| board.is_empty(middle))
                && board.is_empty(to);
        }
        return false;
    }

    if d_file.abs() == 1 && d_rank == dir {
        return match board.get(to) {
            Some(target) => target.color != color,
            None => en_passant_capture_allowed(board, to, color, en_passant),
        };
    }

    false
}

/// Diagonal-forward attack, independent of what stands on `target`.
#[inline]
pub fn pawn_attacks(from: Square, target: Square, color: Color) -> bool {
    let d_rank = target.rank() as i8 - from.rank() as i8;
    let d_file = target.file() as i8 - from.file() as i8;
    d_rank == color.forward() && d_file.abs() == 1
}

/// `to` is the en-passant target and an enemy pawn stands behind it.
#[inline]
pub fn en_passant_capture_allowed(
    board: &Board,
    to: Square,
    color: Color,
    en_passant: Option<Square>,
) -> bool {
    en_passant == Some(to)
        && en_passant_victim_square(to, color)
            .and_then(|victim| board.get(victim))
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.color != color)
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub fn en_passant_victim_square(to: Square, color: Color) -> Option<Square> {
    to.offset(-color.forward(), 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;
    use crate::utils::algebraic::algebraic_to_square as sq;

    fn parse(name: &str) -> Square {
        sq(name).expect("test square should parse")
    }

    #[test]
    fn double_push_needs_start_rank_and_clear_path() {
        let mut board = Board::standard();
        assert!(pawn_move_allowed(&board, parse("e2"), parse("e4"), Color::White, None));
        assert!(pawn_move_allowed(&board, parse("d7"), parse("d5"), Color::Black, None));

        board.set(parse("e3"), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert!(!pawn_move_allowed(&board, parse("e2"), parse("e4"), Color::White, None));
        assert!(!pawn_move_allowed(&board, parse("e2"), parse("e3"), Color::White, None));
    }

    #[test]
    fn diagonal_needs_enemy_or_en_passant_target() {
        let mut board = Board::empty();
        board.set(parse("e5"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(parse("d5"), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(!pawn_move_allowed(&board, parse("e5"), parse("d6"), Color::White, None));
        assert!(pawn_move_allowed(
            &board,
            parse("e5"),
            parse("d6"),
            Color::White,
            Some(parse("d6"))
        ));

        board.set(parse("f6"), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(pawn_move_allowed(&board, parse("e5"), parse("f6"), Color::White, None));
        // Backwards capture is never allowed.
        assert!(!pawn_move_allowed(&board, parse("e5"), parse("f4"), Color::White, None));
    }

    #[test]
    fn en_passant_needs_an_enemy_pawn_behind_the_target() {
        let mut board = Board::empty();
        board.set(parse("d2"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(parse("e2"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        let target = Some(parse("e3"));

        // The piece "behind" e3 for a white capturer is its own e2 pawn.
        assert!(!pawn_move_allowed(&board, parse("d2"), parse("e3"), Color::White, target));

        board.set(parse("e2"), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert!(!pawn_move_allowed(&board, parse("d2"), parse("e3"), Color::White, target));
    }

    #[test]
    fn attacks_ignore_occupancy() {
        assert!(pawn_attacks(parse("e4"), parse("d5"), Color::White));
        assert!(pawn_attacks(parse("e4"), parse("f3"), Color::Black));
        assert!(!pawn_attacks(parse("e4"), parse("e5"), Color::White));
        assert_eq!(en_passant_victim_square(parse("d6"), Color::White), Some(parse("d5")));
    }
}
