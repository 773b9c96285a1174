//! Engine abstraction shared by the three AI tiers.
//!
//! Each tier takes a temporary exclusive borrow of the live game state for
//! the duration of one decision and hands it back unchanged. None of them
//! check that it is actually `ai_color`'s turn; that belongs to the caller.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, GameState, Move};

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub best_move: Move,
    /// Tier-specific score of `best_move`, when the tier computes one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

impl EngineOutput {
    pub fn new(best_move: Move) -> Self {
        Self {
            best_move,
            score: None,
            info_lines: Vec::new(),
        }
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks a move for `ai_color`. Fails with `NoLegalMoves` when there is
    /// nothing to play.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        ai_color: Color,
    ) -> Result<EngineOutput, ChessErrors>;
}
