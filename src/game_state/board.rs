//! 8x8 mailbox board.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// One optional piece per square, indexed by `Square::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// The standard 32-piece starting array.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.set(Square::at(0, file), Some(Piece::new(*kind, Color::White)));
            board.set(Square::at(1, file), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set(Square::at(6, file), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set(Square::at(7, file), Some(Piece::new(*kind, Color::Black)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index()] = piece;
    }

    /// Removes and returns whatever stood on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_has_thirty_two_pieces() {
        let board = Board::standard();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.king_square(Color::White), Some(Square::at(0, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square::at(7, 4)));
        assert_eq!(
            board.get(Square::at(7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn take_clears_the_square() {
        let mut board = Board::standard();
        let e2 = Square::at(1, 4);
        assert_eq!(board.take(e2), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(board.is_empty(e2));
        assert_eq!(board.piece_count(), 31);
    }
}
