//! Medium tier: one-ply greedy scoring.
//!
//! Each legal move scores the value of what it captures, a bonus for landing
//! near the centre, and a flat bonus if it gives check. The highest score
//! wins and the earliest move keeps a tie.

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::ScopedMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves_for;
use crate::search::board_scoring::{center_bonus, MaterialScorer, CHECK_BONUS};

#[derive(Debug, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score of `mv` for `ai_color`. The state is unchanged on return.
    pub fn score_move(game_state: &mut GameState, mv: Move, ai_color: Color) -> i32 {
        let scoped = ScopedMove::apply(game_state, mv);
        let Some(undo) = scoped.undo_state() else {
            return i32::MIN;
        };

        let capture_value = undo
            .captured
            .map_or(0, |(_, piece)| MaterialScorer::piece_value(piece.kind));
        let check_value = if is_king_in_check(&scoped, ai_color.opposite()) {
            CHECK_BONUS
        } else {
            0
        };

        capture_value + center_bonus(mv.to) + check_value
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "LockChess Greedy"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        ai_color: Color,
    ) -> Result<EngineOutput, ChessErrors> {
        let legal_moves = legal_moves_for(game_state, ai_color);

        let mut best: Option<(Move, i32)> = None;
        for mv in &legal_moves {
            let score = Self::score_move(game_state, *mv, ai_color);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((*mv, score));
            }
        }

        let (best_move, best_score) = best.ok_or(ChessErrors::NoLegalMoves)?;

        let mut out = EngineOutput::new(best_move);
        out.score = Some(best_score);
        out.info_lines
            .push(format!("greedy_engine legal_moves {}", legal_moves.len()));
        out.info_lines
            .push(format!("greedy_engine best_score {best_score}"));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::long_algebraic::parse_move;

    fn mv(text: &str) -> Move {
        parse_move(text).expect("test move should parse")
    }

    #[test]
    fn prefers_the_biggest_capture() {
        // Knight on e4 can take a rook on f6 or a pawn on d6.
        let mut game = GameState::from_fen("4k3/8/3p1r2/8/4N3/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let before = game.clone();

        let out = GreedyEngine::new()
            .choose_move(&mut game, Color::White)
            .expect("moves exist");

        assert_eq!(out.best_move, mv("e4f6"));
        assert_eq!(game, before);
    }

    #[test]
    fn score_adds_centre_and_check_terms() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")
            .expect("FEN should parse");
        // a1a8 gives check from a far corner: 0 centre + 50 check.
        assert_eq!(GreedyEngine::score_move(&mut game, mv("a1a8"), Color::White), 50);
        // a1a4: distance 3 from d4, no check.
        assert_eq!(GreedyEngine::score_move(&mut game, mv("a1a4"), Color::White), 40);
    }

    #[test]
    fn en_passant_counts_as_a_pawn_capture() {
        let mut game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should parse");
        // d6 is two steps from d4: 50 centre + 100 pawn.
        assert_eq!(GreedyEngine::score_move(&mut game, mv("e5d6"), Color::White), 150);
    }

    #[test]
    fn first_move_keeps_a_tie() {
        let mut game = GameState::new_game();
        let out = GreedyEngine::new()
            .choose_move(&mut game, Color::White)
            .expect("moves exist");
        // Several pawn pushes reach the centre; e2e4 and d2d4 both score 70,
        // d2d4 is generated first.
        assert_eq!(out.best_move, mv("d2d4"));
        assert_eq!(out.score, Some(70));
    }
}
