//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The AI's side maximizes and the opponent minimizes. Moves are searched in
//! generation order with no reordering, and at every level the first move
//! found keeps a tie. Each child is explored in place on the borrowed state
//! through `ScopedMove`, so the caller's position is untouched afterwards.

use tracing::trace;

use crate::config::DEFAULT_SEARCH_DEPTH;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::ScopedMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves_for};
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies to look ahead, counting the AI's own move.
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
    cutoffs: u64,
}

/// Best move for `ai_color` in the current position. `best_move` is `None`
/// only when `ai_color` has no legal move.
pub fn minimax_search<S: BoardScorer>(
    game_state: &mut GameState,
    ai_color: Color,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut stats = SearchStats::default();
    let moves = legal_moves_for(game_state, ai_color);
    let depth = config.max_depth.max(1);

    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for mv in moves {
        let score = {
            let mut scoped = ScopedMove::apply(game_state, mv);
            minimax(&mut scoped, depth - 1, false, alpha, beta, ai_color, scorer, &mut stats)
        };

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(score);
    }

    trace!(
        depth,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        best_score,
        best_move = ?best_move.map(|mv| mv.to_string()),
        "minimax search finished"
    );

    SearchResult {
        best_move,
        best_score,
        nodes: stats.nodes,
        cutoffs: stats.cutoffs,
    }
}

#[allow(clippy::too_many_arguments)]
fn minimax<S: BoardScorer>(
    game_state: &mut GameState,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    ai_color: Color,
    scorer: &S,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    let mover = if maximizing {
        ai_color
    } else {
        ai_color.opposite()
    };

    if depth == 0 {
        if !has_any_legal_move(game_state, mover) {
            return terminal_score(game_state, mover, maximizing);
        }
        return scorer.score(game_state, ai_color);
    }

    let moves = legal_moves_for(game_state, mover);
    if moves.is_empty() {
        return terminal_score(game_state, mover, maximizing);
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let score = {
                let mut scoped = ScopedMove::apply(game_state, mv);
                minimax(&mut scoped, depth - 1, false, alpha, beta, ai_color, scorer, stats)
            };
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let score = {
                let mut scoped = ScopedMove::apply(game_state, mv);
                minimax(&mut scoped, depth - 1, true, alpha, beta, ai_color, scorer, stats)
            };
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Score of a node where `mover` has no legal move: mate if in check,
/// otherwise a draw.
fn terminal_score(game_state: &GameState, mover: Color, maximizing: bool) -> i32 {
    if !is_king_in_check(game_state, mover) {
        0
    } else if maximizing {
        -MATE_SCORE
    } else {
        MATE_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::{MaterialScorer, PositionalScorer};

    #[test]
    fn finds_back_rank_mate_in_one() {
        let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1")
            .expect("FEN should parse");
        let before = game.clone();

        let result = minimax_search(&mut game, Color::White, &PositionalScorer, SearchConfig::default());

        assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("a1a8".to_owned()));
        assert_eq!(result.best_score, MATE_SCORE);
        assert!(result.nodes > 0);
        assert_eq!(game, before);
    }

    #[test]
    fn wins_a_hanging_queen() {
        let mut game = GameState::from_fen("4k3/8/8/3q4/8/8/3R4/3K4 w - - 0 1")
            .expect("FEN should parse");
        let result = minimax_search(
            &mut game,
            Color::White,
            &MaterialScorer,
            SearchConfig { max_depth: 2 },
        );
        assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("d2d5".to_owned()));
    }

    #[test]
    fn no_legal_moves_yields_no_best_move() {
        let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("stalemate FEN should parse");
        let result = minimax_search(&mut game, Color::Black, &PositionalScorer, SearchConfig::default());
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn pruning_does_not_change_the_root_choice_at_depth_one() {
        let mut game = GameState::new_game();
        let shallow = minimax_search(&mut game, Color::White, &MaterialScorer, SearchConfig { max_depth: 1 });
        // Every opening move keeps material level, so the first generated move wins the tie.
        assert_eq!(shallow.best_score, 0);
        assert_eq!(shallow.best_move.map(|mv| mv.to_string()), Some("b1a3".to_owned()));
        assert_eq!(shallow.cutoffs, 0);
    }
}
