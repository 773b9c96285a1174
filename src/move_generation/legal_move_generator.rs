//! Legality checking and legal move enumeration.
//!
//! Enumeration is deliberately plain: every piece of the color against every
//! one of the 64 destinations, each candidate filtered through the same
//! legality test the UI uses. At this board size the quadratic scan is cheap
//! and keeps a single source of truth for what "legal" means.

use crate::game_state::chess_rules::{king_home, rook_home};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{
    is_king_in_check, is_position_under_attack, would_be_in_check,
};
use crate::moves::king_moves::is_castling_shape;
use crate::moves::movement_patterns::{is_path_clear, pattern_allows};

/// Legality for the side to move.
#[inline]
pub fn is_legal_move(game_state: &mut GameState, mv: Move) -> bool {
    let side = game_state.side_to_move;
    is_legal_move_for(game_state, mv, side)
}

/// Legality as if `color` were to move.
///
/// The en-passant target only counts for the side actually on move, since it
/// expires after one ply.
pub fn is_legal_move_for(game_state: &mut GameState, mv: Move, color: Color) -> bool {
    let Some(piece) = game_state.board.get(mv.from) else {
        return false;
    };
    if piece.color != color {
        return false;
    }
    if game_state
        .board
        .get(mv.to)
        .is_some_and(|target| target.color == color)
    {
        return false;
    }

    let pattern_ok = if piece.kind == PieceKind::King && is_castling_shape(mv.from, mv.to) {
        is_valid_castling(game_state, mv, color)
    } else {
        let en_passant = if color == game_state.side_to_move {
            game_state.en_passant_square
        } else {
            None
        };
        pattern_allows(&game_state.board, piece, mv.from, mv.to, en_passant)
    };

    pattern_ok && !would_be_in_check(game_state, mv)
}

/// Castling precondition check for a two-file king move.
///
/// The king must stand on its home square with the matching right and rook,
/// every square between king and rook must be empty, and the king's start,
/// transit and destination squares must not be attacked.
pub fn is_valid_castling(game_state: &GameState, mv: Move, color: Color) -> bool {
    let home = king_home(color);
    if mv.from != home || !is_castling_shape(mv.from, mv.to) {
        return false;
    }
    if game_state.board.get(home) != Some(Piece::new(PieceKind::King, color)) {
        return false;
    }

    let kingside = mv.to.file() > mv.from.file();
    if game_state.castling_rights & castling_flag(color, kingside) == 0 {
        return false;
    }

    let rook_sq = rook_home(color, kingside);
    if game_state.board.get(rook_sq) != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }
    if !is_path_clear(&game_state.board, home, rook_sq) {
        return false;
    }

    let step = if kingside { 1 } else { -1 };
    let Some(transit) = home.offset(0, step) else {
        return false;
    };

    [home, transit, mv.to]
        .into_iter()
        .all(|square| !is_position_under_attack(game_state, square, color))
}

/// Every legal move for `color`, in board order of origin then destination.
///
/// Pawn moves onto the last rank are listed once per promotion kind, queen first.
pub fn legal_moves_for(game_state: &mut GameState, color: Color) -> Vec<Move> {
    let origins: Vec<(Square, Piece)> = game_state.board.pieces_of(color).collect();
    let mut legal = Vec::with_capacity(48);

    for (from, piece) in origins {
        collect_moves_from(game_state, from, piece, color, &mut legal);
    }

    legal
}

/// Legal moves of the piece on `square`, if it belongs to the side to move.
pub fn legal_moves_from(game_state: &mut GameState, square: Square) -> Vec<Move> {
    let mut legal = Vec::new();
    let side = game_state.side_to_move;
    if let Some(piece) = game_state.board.get(square) {
        if piece.color == side {
            collect_moves_from(game_state, square, piece, side, &mut legal);
        }
    }
    legal
}

pub fn has_any_legal_move(game_state: &mut GameState, color: Color) -> bool {
    let origins: Vec<Square> = game_state
        .board
        .pieces_of(color)
        .map(|(sq, _)| sq)
        .collect();

    origins.into_iter().any(|from| {
        Square::all().any(|to| is_legal_move_for(game_state, Move::new(from, to), color))
    })
}

pub fn is_checkmate(game_state: &mut GameState) -> bool {
    let side = game_state.side_to_move;
    is_king_in_check(game_state, side) && !has_any_legal_move(game_state, side)
}

pub fn is_stalemate(game_state: &mut GameState) -> bool {
    let side = game_state.side_to_move;
    !is_king_in_check(game_state, side) && !has_any_legal_move(game_state, side)
}

fn collect_moves_from(
    game_state: &mut GameState,
    from: Square,
    piece: Piece,
    color: Color,
    out: &mut Vec<Move>,
) {
    let promotes = piece.kind == PieceKind::Pawn;
    for to in Square::all() {
        let candidate = Move::new(from, to);
        if !is_legal_move_for(game_state, candidate, color) {
            continue;
        }
        if promotes && to.rank() == color.promotion_rank() {
            out.extend(
                PieceKind::PROMOTIONS
                    .iter()
                    .map(|kind| Move::with_promotion(from, to, *kind)),
            );
        } else {
            out.push(candidate);
        }
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
    fn start_position_has_twenty_moves_for_each_side() {
        let mut game = GameState::new_game();
        assert_eq!(legal_moves_for(&mut game, Color::White).len(), 20);
        assert_eq!(legal_moves_for(&mut game, Color::Black).len(), 20);
    }

    #[test]
    fn legality_query_is_idempotent_and_pure() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let moves_before = legal_moves_for(&mut game, Color::White);

        for text in ["e2e4", "g1f3", "e1e2", "a1a3", "e7e5"] {
            let first = is_legal_move(&mut game, mv(text));
            let second = is_legal_move(&mut game, mv(text));
            assert_eq!(first, second, "{text} changed its answer");
        }

        assert_eq!(game, before);
        assert_eq!(legal_moves_for(&mut game, Color::White), moves_before);
    }

    #[test]
    fn castling_through_an_attacked_square_is_rejected() {
        let mut game = GameState::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1")
            .expect("FEN should parse");
        assert!(game.is_position_under_attack(Square::new(0, 5).expect("f1"), Color::White));
        assert!(!is_valid_castling(&game, mv("e1g1"), Color::White));
        assert!(!is_legal_move(&mut game, mv("e1g1")));
    }

    #[test]
    fn castling_needs_right_rook_and_empty_path() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        assert!(is_legal_move(&mut game, mv("e1g1")));
        assert!(is_legal_move(&mut game, mv("e1c1")));

        let mut blocked = GameState::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1")
            .expect("FEN should parse");
        assert!(!is_legal_move(&mut blocked, mv("e1c1")));
        assert!(is_legal_move(&mut blocked, mv("e1g1")));

        let mut no_right = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1")
            .expect("FEN should parse");
        assert!(!is_legal_move(&mut no_right, mv("e1g1")));

        let mut in_check = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        in_check.board.set(
            Square::new(3, 4).expect("e4"),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        assert!(!is_legal_move(&mut in_check, mv("e1g1")));
    }

    #[test]
    fn promotions_are_listed_per_kind() {
        let mut game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")
            .expect("FEN should parse");
        let from_a7 = legal_moves_from(&mut game, Square::new(6, 0).expect("a7"));
        assert_eq!(from_a7.len(), 4);
        assert_eq!(from_a7[0].promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn legal_moves_from_respects_turn() {
        let mut game = GameState::new_game();
        assert_eq!(legal_moves_from(&mut game, Square::new(0, 6).expect("g1")).len(), 2);
        assert!(legal_moves_from(&mut game, Square::new(7, 6).expect("g8")).is_empty());
        assert!(legal_moves_from(&mut game, Square::new(3, 3).expect("d4")).is_empty());
    }
}
