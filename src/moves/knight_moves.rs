use crate::game_state::chess_types::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Knights jump, so intervening pieces never matter.
#[inline]
pub fn knight_move_allowed(from: Square, to: Square) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|(d_rank, d_file)| from.offset(*d_rank, *d_file) == Some(to))
}

#[cfg(test)]
mod tests {
    use super::{knight_move_allowed, KNIGHT_OFFSETS};
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_in_the_corner_reaches_two_squares() {
        let a1 = Square::new(0, 0).expect("a1");
        let reachable = Square::all()
            .filter(|to| knight_move_allowed(a1, *to))
            .count();
        assert_eq!(reachable, 2);

        let d4 = Square::new(3, 3).expect("d4");
        let from_offsets = KNIGHT_OFFSETS
            .iter()
            .filter_map(|(dr, df)| d4.offset(*dr, *df))
            .filter(|to| knight_move_allowed(d4, *to))
            .count();
        assert_eq!(from_offsets, 8);
    }
}
