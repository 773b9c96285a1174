//! Per-kind movement dispatch.
//!
//! The piece set is closed, so every rule is a `match` over `PieceKind`.
//! Nothing here knows about turns or checks: these are pseudo-legal shapes.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_move_allowed;
use crate::moves::king_moves::king_step_allowed;
use crate::moves::knight_moves::knight_move_allowed;
use crate::moves::pawn_moves::{pawn_attacks, pawn_move_allowed};
use crate::moves::queen_moves::queen_move_allowed;
use crate::moves::rook_moves::rook_move_allowed;

/// True when every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares sharing a rank, file or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_rank = (to.rank() as i8 - from.rank() as i8).signum();
    let step_file = (to.file() as i8 - from.file() as i8).signum();

    let mut current = from.offset(step_rank, step_file);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step_rank, step_file);
    }
    false
}

/// Movement-pattern check for `piece` going `from -> to`, excluding castling.
///
/// Destination occupancy by a friendly piece is the caller's concern.
pub fn pattern_allows(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    en_passant: Option<Square>,
) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_move_allowed(board, from, to, piece.color, en_passant),
        PieceKind::Knight => knight_move_allowed(from, to),
        PieceKind::Bishop => bishop_move_allowed(board, from, to),
        PieceKind::Rook => rook_move_allowed(board, from, to),
        PieceKind::Queen => queen_move_allowed(board, from, to),
        PieceKind::King => king_step_allowed(from, to),
    }
}

/// Whether `piece` on `from` attacks `target`.
///
/// Same as `pattern_allows` except pawns attack both forward diagonals
/// whatever stands there and never attack straight ahead.
pub fn attacks_square(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, target, piece.color),
        _ => pattern_allows(board, piece, from, target, None),
    }
}

/// Any piece of `attacker` attacking `target`.
pub fn is_attacked_by(board: &Board, target: Square, attacker: Color) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, piece)| attacks_square(board, piece, from, target))
}
