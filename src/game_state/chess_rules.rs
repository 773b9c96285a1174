//! Canonical chess-rule constants.
//!
//! Starting position notation plus the home squares castling relies on.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_FILE: u8 = 4;
pub const KINGSIDE_ROOK_FILE: u8 = 7;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::at(color.back_rank(), KING_HOME_FILE)
}

/// Corner the rook starts on for the given castling side.
#[inline]
pub const fn rook_home(color: Color, kingside: bool) -> Square {
    let file = if kingside {
        KINGSIDE_ROOK_FILE
    } else {
        QUEENSIDE_ROOK_FILE
    };
    Square::at(color.back_rank(), file)
}

/// Where the rook lands after castling: f-file kingside, d-file queenside.
#[inline]
pub const fn castled_rook_square(color: Color, kingside: bool) -> Square {
    let file = if kingside { 5 } else { 3 };
    Square::at(color.back_rank(), file)
}
