//! Static evaluation used by the AI tiers.
//!
//! Search delegates position scoring to `BoardScorer`, so the heuristic can be
//! swapped without touching the search code. Scores are always reported from
//! the perspective of one fixed color (the AI's), not the side to move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves_for;

/// Magnitude of a checkmate score. Dominates every heuristic term.
pub const MATE_SCORE: i32 = 10_000;

/// Bonus per legal move of difference in mobility.
pub const MOBILITY_WEIGHT: i32 = 10;

/// Flat bonus the Medium tier gives a checking move.
pub const CHECK_BONUS: i32 = 50;

pub trait BoardScorer {
    /// Score from the perspective of `perspective`. Takes `&mut` because
    /// mobility is counted with simulate-and-undo legality checks; the state
    /// is unchanged on return.
    fn score(&self, game_state: &mut GameState, perspective: Color) -> i32;
}

/// Pawn bonuses, White's view, row 0 is rank 8.
pub const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Knight bonuses, White's view, row 0 is rank 8.
pub const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const CENTER_SQUARES: [(u8, u8); 2] = [(3, 3), (3, 4)];

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &mut GameState, perspective: Color) -> i32 {
        game_state
            .board
            .pieces()
            .map(|(_, piece)| signed(piece.color, perspective, Self::piece_value(piece.kind)))
            .sum()
    }
}

/// Piece-square bonus for `piece` standing on `square`. Black reads the
/// tables mirrored top to bottom.
#[inline]
pub fn positional_bonus(piece: Piece, square: Square) -> i32 {
    let row = match piece.color {
        Color::White => 7 - square.rank() as usize,
        Color::Black => square.rank() as usize,
    };
    let col = square.file() as usize;

    match piece.kind {
        PieceKind::Pawn => PAWN_TABLE[row][col],
        PieceKind::Knight => KNIGHT_TABLE[row][col],
        _ => 0,
    }
}

/// `(7 - distance) * 10`, where distance is the Manhattan distance to the
/// nearer of d4 and e4. Ranges from 70 on d4/e4 down to 0 on a8/h8.
#[inline]
pub fn center_bonus(square: Square) -> i32 {
    let distance = CENTER_SQUARES
        .iter()
        .map(|&(rank, file)| {
            (square.rank() as i32 - rank as i32).abs() + (square.file() as i32 - file as i32).abs()
        })
        .min()
        .unwrap_or(0);
    (7 - distance) * 10
}

/// Material plus piece-square tables plus mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    fn static_terms(board: &Board, perspective: Color) -> i32 {
        board
            .pieces()
            .map(|(square, piece)| {
                let value = MaterialScorer::piece_value(piece.kind) + positional_bonus(piece, square);
                signed(piece.color, perspective, value)
            })
            .sum()
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, game_state: &mut GameState, perspective: Color) -> i32 {
        let static_score = Self::static_terms(&game_state.board, perspective);
        let own_mobility = legal_moves_for(game_state, perspective).len() as i32;
        let their_mobility = legal_moves_for(game_state, perspective.opposite()).len() as i32;
        static_score + MOBILITY_WEIGHT * (own_mobility - their_mobility)
    }
}

#[inline]
fn signed(owner: Color, perspective: Color, value: i32) -> i32 {
    if owner == perspective {
        value
    } else {
        -value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn start_position_is_balanced() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(MaterialScorer.score(&mut game, Color::White), 0);
        assert_eq!(PositionalScorer.score(&mut game, Color::White), 0);
        assert_eq!(PositionalScorer.score(&mut game, Color::Black), 0);
        assert_eq!(game, before);
    }

    #[test]
    fn material_is_signed_by_perspective() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&mut game, Color::White), 900);
        assert_eq!(MaterialScorer.score(&mut game, Color::Black), -900);
    }

    #[test]
    fn tables_mirror_for_black() {
        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(positional_bonus(white_pawn, sq("e7")), 50);
        assert_eq!(positional_bonus(black_pawn, sq("e2")), 50);
        assert_eq!(positional_bonus(white_pawn, sq("d2")), -20);
        assert_eq!(positional_bonus(black_pawn, sq("d7")), -20);

        let white_knight = Piece::new(PieceKind::Knight, Color::White);
        assert_eq!(positional_bonus(white_knight, sq("a1")), -50);
        assert_eq!(positional_bonus(white_knight, sq("e4")), 20);
        assert_eq!(positional_bonus(Piece::new(PieceKind::Rook, Color::White), sq("e4")), 0);
    }

    #[test]
    fn center_bonus_falls_off_with_distance() {
        assert_eq!(center_bonus(sq("e4")), 70);
        assert_eq!(center_bonus(sq("d4")), 70);
        assert_eq!(center_bonus(sq("d5")), 60);
        assert_eq!(center_bonus(sq("e6")), 50);
        assert_eq!(center_bonus(sq("f3")), 50);
        assert_eq!(center_bonus(sq("a1")), 10);
        assert_eq!(center_bonus(sq("a8")), 0);
        assert_eq!(center_bonus(sq("h8")), 0);
    }
}
