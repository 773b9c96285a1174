//! The rules engine's single mutable aggregate.
//!
//! `GameState` stores the board, side to move, castling rights, en-passant
//! target and move history. Rules live in `move_generation`; the methods here
//! are the stable entrypoints the UI layer and the AI call.

use tracing::{debug, warn};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, undo_last_move};
use crate::move_generation::legal_move_checks::{
    is_king_in_check, is_position_under_attack, would_be_in_check,
};
use crate::move_generation::legal_move_generator::{
    is_checkmate, is_legal_move, is_stalemate, is_valid_castling, legal_moves_for,
    legal_moves_from,
};
use crate::puzzles::puzzle_catalog::PuzzleRecord;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // Tracked only so positions can be exported back to notation.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Empty board, White to move, no rights. Used as the parser's scratch state.
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Standard starting array, White to move, all castling rights.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            castling_rights: CASTLE_ALL,
            ..Self::new_empty()
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    pub fn reset(&mut self) {
        *self = Self::new_game();
        debug!("game reset to starting position");
    }

    /// Replaces the whole position. On error the current position is kept.
    pub fn load_from_fen(&mut self, fen: &str) -> Result<(), ChessErrors> {
        match parse_fen(fen) {
            Ok(parsed) => {
                *self = parsed;
                debug!(fen, "position loaded");
                Ok(())
            }
            Err(err) => {
                warn!(fen, %err, "rejected board description");
                Err(err)
            }
        }
    }

    pub fn load_puzzle(&mut self, puzzle: &PuzzleRecord) -> Result<(), ChessErrors> {
        self.load_from_fen(puzzle.fen)?;
        debug!(id = puzzle.id, name = puzzle.name, "puzzle loaded");
        Ok(())
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    pub fn is_legal_move(&mut self, mv: Move) -> bool {
        is_legal_move(self, mv)
    }

    pub fn is_valid_castling(&self, mv: Move, color: Color) -> bool {
        is_valid_castling(self, mv, color)
    }

    pub fn would_be_in_check(&mut self, mv: Move) -> bool {
        would_be_in_check(self, mv)
    }

    pub fn is_position_under_attack(&self, square: Square, victim: Color) -> bool {
        is_position_under_attack(self, square, victim)
    }

    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessErrors> {
        make_move(self, mv)
    }

    pub fn undo_last_move(&mut self) -> Result<MoveRecord, ChessErrors> {
        undo_last_move(self)
    }

    pub fn get_all_legal_moves(&mut self, color: Color) -> Vec<Move> {
        legal_moves_for(self, color)
    }

    pub fn legal_moves_from(&mut self, square: Square) -> Vec<Move> {
        legal_moves_from(self, square)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    pub fn is_checkmate(&mut self) -> bool {
        is_checkmate(self)
    }

    pub fn is_stalemate(&mut self) -> bool {
        is_stalemate(self)
    }

    /// Checkmate or stalemate for the side to move.
    pub fn is_game_over(&mut self) -> bool {
        let side = self.side_to_move;
        legal_moves_for(self, side).is_empty()
    }
}
