//! Undo records and the scoped simulate-then-restore guard.
//!
//! Check detection and search both try a move on the live board, ask a
//! question, and put everything back. `ScopedMove` owns the rollback: the
//! restore runs in `Drop`, so an early return or a panic inside the query
//! cannot leave the board half-mutated.

use std::ops::{Deref, DerefMut};

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_unchecked, restore};

/// Everything needed to reverse one applied move exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    /// The move as applied, with any promotion already resolved.
    pub mv: Move,
    pub moved_piece: Piece,
    /// Captured piece and the square it stood on (differs from `mv.to` for en passant).
    pub captured: Option<(Square, Piece)>,
    /// Rook relocation performed by a castling move.
    pub rook_move: Option<(Square, Square)>,

    pub prev_side_to_move: Color,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}

/// One entry of the game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub undo: UndoState,
}

impl MoveRecord {
    #[inline]
    pub fn played(&self) -> Move {
        self.undo.mv
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.undo.captured.map(|(_, piece)| piece)
    }
}

/// A move applied to a borrowed `GameState` for the lifetime of the guard.
///
/// The move is not validated and not recorded in the history. Dropping the
/// guard restores board, side to move, castling rights, en-passant target and
/// counters to their exact prior values.
pub struct ScopedMove<'a> {
    state: &'a mut GameState,
    undo: Option<UndoState>,
}

impl<'a> ScopedMove<'a> {
    /// Applies `mv`. If `mv.from` is empty nothing changes and the guard is inert.
    pub fn apply(state: &'a mut GameState, mv: Move) -> Self {
        let undo = apply_unchecked(state, mv);
        Self { state, undo }
    }

    /// The undo record for the applied move, `None` for an inert guard.
    pub fn undo_state(&self) -> Option<&UndoState> {
        self.undo.as_ref()
    }
}

impl Deref for ScopedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            restore(self.state, undo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScopedMove;
    use crate::game_state::chess_types::*;
    use crate::utils::long_algebraic::parse_move;

    #[test]
    fn guard_restores_state_on_drop() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = parse_move("e2e4").expect("move text should parse");

        {
            let scoped = ScopedMove::apply(&mut game, mv);
            assert_eq!(scoped.side_to_move, Color::Black);
            assert!(scoped.board.is_empty(mv.from));
        }

        assert_eq!(game, before);
    }

    #[test]
    fn guard_restores_even_when_the_query_panics() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("castling FEN should parse");
        let before = game.clone();
        let castle = parse_move("e1g1").expect("move text should parse");

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let scoped = ScopedMove::apply(&mut game, castle);
            assert_eq!(scoped.castling_rights & CASTLE_WHITE_KINGSIDE, 0);
            panic!("query failed mid-simulation");
        }));

        assert!(result.is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let e4 = parse_move("e2e4").expect("move text should parse");
        let e5 = parse_move("e7e5").expect("move text should parse");

        {
            let mut first = ScopedMove::apply(&mut game, e4);
            {
                let second = ScopedMove::apply(&mut first, e5);
                assert_eq!(second.side_to_move, Color::White);
                assert_eq!(second.fullmove_number, 2);
            }
            assert_eq!(first.en_passant_square.map(|sq| sq.to_string()), Some("e3".to_owned()));
        }

        assert_eq!(game, before);
    }
}
