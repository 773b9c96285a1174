//! Move-intent text such as `e2e4` or `e7e8q`.
//!
//! The UI hands over `(from, to, optional promotion letter)`; this module is
//! the text form of that tuple. It says nothing about legality.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_move(text: &str) -> Result<Move, ChessErrors> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidMoveText(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])
        .map_err(|_| ChessErrors::InvalidMoveText(text.to_owned()))?;
    let to = algebraic_to_square(&text[2..4])
        .map_err(|_| ChessErrors::InvalidMoveText(text.to_owned()))?;

    match text[4..].chars().next() {
        None => Ok(Move::new(from, to)),
        Some(letter) => {
            let promotion = promotion_from_letter(letter)
                .ok_or_else(|| ChessErrors::InvalidMoveText(text.to_owned()))?;
            Ok(Move::with_promotion(from, to, promotion))
        }
    }
}

/// Builds a move from UI parts. An unknown promotion letter is dropped and
/// the engine then promotes to a queen.
pub fn move_from_intent(from: Square, to: Square, promotion_letter: Option<char>) -> Move {
    Move {
        from,
        to,
        promotion: promotion_letter.and_then(promotion_from_letter),
    }
}

/// `q`, `r`, `b` or `n`, either case.
pub fn promotion_from_letter(letter: char) -> Option<PieceKind> {
    match letter.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}
