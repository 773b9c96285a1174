//! Perft node counting.
//!
//! Walks the legal move tree to a fixed depth and counts leaves, the standard
//! way to cross-check move generation against published totals.

use crate::game_state::chess_types::*;
use crate::game_state::undo_state::ScopedMove;
use crate::move_generation::legal_move_generator::legal_moves_for;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let side = game_state.side_to_move;
    let moves = legal_moves_for(game_state, side);
    let mut total = PerftCounts::default();

    for mv in moves {
        let mut scoped = ScopedMove::apply(game_state, mv);
        if depth == 1 {
            total.nodes += 1;
            if let Some(undo) = scoped.undo_state() {
                if let Some((square, _)) = undo.captured {
                    total.captures += 1;
                    if square != undo.mv.to {
                        total.en_passant += 1;
                    }
                }
                if undo.rook_move.is_some() {
                    total.castles += 1;
                }
                if undo.mv.promotion.is_some() {
                    total.promotions += 1;
                }
            }
        } else {
            total.merge(perft(&mut scoped, depth - 1));
        }
    }

    total
}
