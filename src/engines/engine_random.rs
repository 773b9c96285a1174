//! Easy tier: a uniformly random legal move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Color, GameState};
use crate::move_generation::legal_move_generator::legal_moves_for;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// A fixed seed makes the sequence of choices reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "LockChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        ai_color: Color,
    ) -> Result<EngineOutput, ChessErrors> {
        let legal_moves = legal_moves_for(game_state, ai_color);
        let picked = *legal_moves
            .choose(&mut self.rng)
            .ok_or(ChessErrors::NoLegalMoves)?;

        let mut out = EngineOutput::new(picked);
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        Ok(out)
    }
}
