//! Attack and check queries.
//!
//! `is_position_under_attack` deliberately ignores whose turn it is: it asks
//! whether any opposing piece has a pseudo-legal path onto the square.

use crate::game_state::chess_types::*;
use crate::game_state::undo_state::ScopedMove;
use crate::moves::movement_patterns::is_attacked_by;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.board.king_square(color)
}

/// True iff a piece of the color opposing `victim` attacks `square`.
#[inline]
pub fn is_position_under_attack(game_state: &GameState, square: Square, victim: Color) -> bool {
    is_attacked_by(&game_state.board, square, victim.opposite())
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_position_under_attack(game_state, king_sq, color)
}

/// Tries `mv` on the live board and reports whether the mover's king is then
/// attacked. The board is restored before returning.
pub fn would_be_in_check(game_state: &mut GameState, mv: Move) -> bool {
    let Some(mover) = game_state.board.get(mv.from) else {
        return false;
    };
    let scoped = ScopedMove::apply(game_state, mv);
    is_king_in_check(&scoped, mover.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::long_algebraic::parse_move;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn attack_query_ignores_turn() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1")
            .expect("FEN should parse");
        assert!(game.is_position_under_attack(sq("f1"), Color::White));
        assert!(game.is_position_under_attack(sq("e1"), Color::White));
        assert!(!game.is_position_under_attack(sq("h1"), Color::Black));
        assert!(is_king_in_check(&game, Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
    }

    #[test]
    fn pinned_piece_move_would_expose_the_king() {
        let mut game = GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1")
            .expect("FEN should parse");
        let before = game.clone();

        assert!(would_be_in_check(&mut game, parse_move("e2d3").expect("move")));
        assert!(!would_be_in_check(&mut game, parse_move("e1d1").expect("move")));
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_capture_that_uncovers_a_rank_attack_is_detected() {
        // Both pawns leave the fifth rank and the rook sees the king.
        let mut game = GameState::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1")
            .expect("FEN should parse");
        assert!(would_be_in_check(&mut game, parse_move("e5d6").expect("move")));
        assert!(!game.is_legal_move(parse_move("e5d6").expect("move")));
    }
}
