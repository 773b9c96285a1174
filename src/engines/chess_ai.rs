//! Difficulty-selected AI facade.
//!
//! `ChessAi` owns one engine for its tier and never keeps a reference to the
//! game. Each call borrows the state mutably for the length of the decision.

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::config::AiConfig;
use crate::difficulty::Difficulty;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Color, GameState, Move};
use crate::search::minimax::SearchConfig;

pub struct ChessAi {
    difficulty: Difficulty,
    color: Color,
    engine: Box<dyn Engine>,
}

impl ChessAi {
    /// Default search depth and an unseeded random source.
    pub fn new(difficulty: Difficulty, color: Color) -> Self {
        Self::build(difficulty, color, SearchConfig::default(), None)
    }

    pub fn with_config(config: &AiConfig) -> Self {
        Self::build(
            config.difficulty,
            config.color,
            SearchConfig {
                max_depth: config.search_depth,
            },
            config.seed,
        )
    }

    fn build(difficulty: Difficulty, color: Color, search: SearchConfig, seed: Option<u64>) -> Self {
        let engine: Box<dyn Engine> = match difficulty {
            Difficulty::Easy => Box::new(RandomEngine::new(seed)),
            Difficulty::Medium => Box::new(GreedyEngine::new()),
            Difficulty::Hard => Box::new(MinimaxEngine::new(search)),
        };
        Self {
            difficulty,
            color,
            engine,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Full engine output for the AI's color in the current position.
    pub fn analyze(&mut self, game_state: &mut GameState) -> Result<EngineOutput, ChessErrors> {
        let out = self.engine.choose_move(game_state, self.color)?;
        debug!(
            difficulty = %self.difficulty,
            color = %self.color,
            best_move = %out.best_move,
            score = ?out.score,
            "ai move chosen"
        );
        Ok(out)
    }

    pub fn get_best_move(&mut self, game_state: &mut GameState) -> Result<Move, ChessErrors> {
        self.analyze(game_state).map(|out| out.best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::long_algebraic::parse_move;

    const BACK_RANK: &str = "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1";

    #[test]
    fn every_tier_returns_a_legal_move() {
        for difficulty in Difficulty::ALL {
            let mut game = GameState::new_game();
            let mut ai = ChessAi::with_config(&AiConfig {
                difficulty,
                color: Color::White,
                search_depth: 1,
                seed: Some(3),
            });
            let best = ai.get_best_move(&mut game).expect("start position has moves");
            assert!(game.is_legal_move(best), "{difficulty} produced {best}");
        }
    }

    #[test]
    fn hard_tier_finds_back_rank_mate() {
        let mut game = GameState::from_fen(BACK_RANK).expect("FEN should parse");
        let mut ai = ChessAi::new(Difficulty::Hard, Color::White);
        assert_eq!(ai.engine_name(), "LockChess Minimax");

        let best = ai.get_best_move(&mut game).expect("white has moves");
        assert_eq!(best, parse_move("a1a8").expect("move text"));

        game.make_move(best).expect("mating move is legal");
        assert!(game.is_checkmate());
    }

    #[test]
    fn any_tier_errors_without_legal_moves() {
        for difficulty in Difficulty::ALL {
            let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
                .expect("stalemate FEN should parse");
            let mut ai = ChessAi::new(difficulty, Color::Black);
            assert!(matches!(
                ai.get_best_move(&mut game),
                Err(ChessErrors::NoLegalMoves)
            ));
        }
    }
}
