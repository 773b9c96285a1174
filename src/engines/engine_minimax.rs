//! Hard tier: alpha-beta minimax over the positional evaluator.

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Color, GameState};
use crate::search::board_scoring::PositionalScorer;
use crate::search::minimax::{minimax_search, SearchConfig};

#[derive(Debug, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
    scorer: PositionalScorer,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: PositionalScorer,
        }
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "LockChess Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        ai_color: Color,
    ) -> Result<EngineOutput, ChessErrors> {
        let result = minimax_search(game_state, ai_color, &self.scorer, self.config);
        let best_move = result.best_move.ok_or(ChessErrors::NoLegalMoves)?;

        let mut out = EngineOutput::new(best_move);
        out.score = Some(result.best_score);
        out.info_lines.push(format!(
            "minimax_engine depth {} score {} nodes {} cutoffs {}",
            self.config.max_depth, result.best_score, result.nodes, result.cutoffs
        ));
        Ok(out)
    }
}
