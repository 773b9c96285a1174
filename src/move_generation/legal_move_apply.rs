//! Move execution and exact reversal.
//!
//! `apply_unchecked` performs every side effect of a move (rook relocation,
//! en-passant removal, promotion, rights, clocks, turn) and returns the record
//! `restore` needs to put the position back bit-for-bit. `make_move` is the
//! validated, history-recording entrypoint built on top of it.

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{castled_rook_square, king_home, rook_home};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::is_legal_move;
use crate::moves::king_moves::is_castling_shape;
use crate::moves::pawn_moves::{en_passant_capture_allowed, en_passant_victim_square};

/// Promotion kind actually used: the requested one if it is a legal target,
/// otherwise a queen.
#[inline]
pub fn resolve_promotion(requested: Option<PieceKind>) -> PieceKind {
    match requested {
        Some(kind) if kind.is_promotion_target() => kind,
        _ => PieceKind::Queen,
    }
}

/// Applies `mv` without any legality check. Returns `None` (and changes
/// nothing) when `mv.from` is empty.
pub fn apply_unchecked(game_state: &mut GameState, mv: Move) -> Option<UndoState> {
    let moved_piece = game_state.board.get(mv.from)?;
    let color = moved_piece.color;

    let prev_side_to_move = game_state.side_to_move;
    let prev_castling_rights = game_state.castling_rights;
    let prev_en_passant_square = game_state.en_passant_square;
    let prev_halfmove_clock = game_state.halfmove_clock;
    let prev_fullmove_number = game_state.fullmove_number;

    let is_pawn = moved_piece.kind == PieceKind::Pawn;
    let mut captured = game_state.board.get(mv.to).map(|piece| (mv.to, piece));

    if is_pawn
        && captured.is_none()
        && mv.from.file() != mv.to.file()
        && en_passant_capture_allowed(&game_state.board, mv.to, color, game_state.en_passant_square)
    {
        if let Some(victim_sq) = en_passant_victim_square(mv.to, color) {
            captured = game_state
                .board
                .take(victim_sq)
                .map(|piece| (victim_sq, piece));
        }
    }

    let rook_move = if moved_piece.kind == PieceKind::King
        && mv.from == king_home(color)
        && is_castling_shape(mv.from, mv.to)
    {
        let kingside = mv.to.file() > mv.from.file();
        let rook_from = rook_home(color, kingside);
        let rook_to = castled_rook_square(color, kingside);
        game_state.board.take(rook_from).map(|rook| {
            game_state.board.set(rook_to, Some(rook));
            (rook_from, rook_to)
        })
    } else {
        None
    };

    let promotion = (is_pawn && mv.to.rank() == color.promotion_rank())
        .then(|| resolve_promotion(mv.promotion));
    let placed_kind = promotion.unwrap_or(moved_piece.kind);

    game_state.board.set(mv.from, None);
    game_state
        .board
        .set(mv.to, Some(Piece::new(placed_kind, color)));

    let d_rank = mv.to.rank() as i8 - mv.from.rank() as i8;
    game_state.en_passant_square = if is_pawn && d_rank.abs() == 2 {
        mv.from.offset(color.forward(), 0)
    } else {
        None
    };

    update_castling_rights(game_state, moved_piece, mv.from, mv.to);

    if is_pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = color.opposite();

    Some(UndoState {
        mv: Move {
            from: mv.from,
            to: mv.to,
            promotion,
        },
        moved_piece,
        captured,
        rook_move,
        prev_side_to_move,
        prev_castling_rights,
        prev_en_passant_square,
        prev_halfmove_clock,
        prev_fullmove_number,
    })
}

/// Reverses a move produced by `apply_unchecked`.
pub fn restore(game_state: &mut GameState, undo: UndoState) {
    game_state.board.set(undo.mv.to, None);
    game_state.board.set(undo.mv.from, Some(undo.moved_piece));

    if let Some((square, piece)) = undo.captured {
        game_state.board.set(square, Some(piece));
    }

    if let Some((rook_from, rook_to)) = undo.rook_move {
        let rook = game_state.board.take(rook_to);
        game_state.board.set(rook_from, rook);
    }

    game_state.side_to_move = undo.prev_side_to_move;
    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
}

/// Validates and plays `mv`, appending it to the history.
///
/// An illegal move is rejected and the state is left untouched.
pub fn make_move(game_state: &mut GameState, mv: Move) -> Result<(), ChessErrors> {
    if !is_legal_move(game_state, mv) {
        debug!(%mv, "rejected illegal move");
        return Err(ChessErrors::IllegalMove(mv));
    }

    let undo = apply_unchecked(game_state, mv).ok_or(ChessErrors::IllegalMove(mv))?;
    debug!(
        mv = %undo.mv,
        piece = %undo.moved_piece.code(),
        captured = undo.captured.is_some(),
        "move played"
    );
    game_state.history.push(MoveRecord { undo });
    Ok(())
}

/// Takes back the most recent move in the history.
pub fn undo_last_move(game_state: &mut GameState) -> Result<MoveRecord, ChessErrors> {
    let record = game_state.history.pop().ok_or(ChessErrors::NothingToUndo)?;
    restore(game_state, record.undo.clone());
    debug!(mv = %record.played(), "move taken back");
    Ok(record)
}

fn update_castling_rights(game_state: &mut GameState, moved_piece: Piece, from: Square, to: Square) {
    if moved_piece.kind == PieceKind::King {
        game_state.castling_rights &=
            !(castling_flag(moved_piece.color, true) | castling_flag(moved_piece.color, false));
    }

    // A rook leaving its corner, or anything landing on it, ends that right.
    for color in [Color::White, Color::Black] {
        for kingside in [true, false] {
            let corner = rook_home(color, kingside);
            if from == corner || to == corner {
                game_state.castling_rights &= !castling_flag(color, kingside);
            }
        }
    }
}
