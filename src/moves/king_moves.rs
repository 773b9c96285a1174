use crate::game_state::chess_types::Square;

/// One step in any direction. Castling is validated separately because it
/// depends on rights and attacked squares.
#[inline]
pub fn king_step_allowed(from: Square, to: Square) -> bool {
    let d_rank = (to.rank() as i8 - from.rank() as i8).abs();
    let d_file = (to.file() as i8 - from.file() as i8).abs();
    d_rank.max(d_file) == 1
}

/// Two-file horizontal king move along the home rank.
#[inline]
pub fn is_castling_shape(from: Square, to: Square) -> bool {
    from.rank() == to.rank() && (to.file() as i8 - from.file() as i8).abs() == 2
}
