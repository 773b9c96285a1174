//! Board-description (FEN) parser.
//!
//! Builds a complete `GameState` from the 6-field notation. The whole string
//! is validated before anything is returned, so callers can swap the result
//! in atomically and keep their previous position on error.
//!
//! The trailing halfmove/fullmove counters are optional and only recorded for
//! export; a non-numeric counter falls back to its default.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::pawn_moves::en_passant_victim_square;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| malformed("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| malformed("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| malformed("missing castling rights"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| malformed("missing en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(malformed("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();
    game_state.board = fen_to_board(board_part)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(
        en_passant_part,
        &game_state.board,
        game_state.side_to_move,
    )?;
    game_state.halfmove_clock = halfmove_part
        .and_then(|text| text.parse::<u16>().ok())
        .unwrap_or(0);
    game_state.fullmove_number = fullmove_part
        .and_then(|text| text.parse::<u16>().ok())
        .unwrap_or(1)
        .max(1);

    // The side that just moved cannot have left its own king attacked.
    let idle = game_state.side_to_move.opposite();
    if is_king_in_check(&game_state, idle) {
        return Err(malformed(&format!(
            "{idle} is in check but {} is to move",
            game_state.side_to_move
        )));
    }

    Ok(game_state)
}

/// Piece-placement field to board. Requires exactly one king per color.
pub fn fen_to_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(malformed(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(malformed(&format!("rank {} has too many files", rank + 1)));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| malformed(&format!("invalid piece character '{ch}'")))?;
            let square = Square::new(rank, file)
                .ok_or_else(|| malformed(&format!("rank {} has too many files", rank + 1)))?;
            board.set(square, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(malformed(&format!("rank {} does not sum to 8 files", rank + 1)));
        }
    }

    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(malformed(&format!("{color} must have exactly one king, found {kings}")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(malformed(&format!("invalid side-to-move field '{side_part}'"))),
    }
}

/// Castling field to rights mask; a subset of `KQkq` or `-`.
pub fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(malformed(&format!("invalid castling character '{ch}'"))),
        }
    }

    Ok(rights)
}

/// En-passant field. The target must lie behind an enemy pawn that could
/// just have advanced two squares: rank 6 with White to move, rank 3 with
/// Black to move.
fn parse_en_passant_square(
    en_passant_part: &str,
    board: &Board,
    side_to_move: Color,
) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| malformed(&format!("invalid en-passant square '{en_passant_part}'")))?;

    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if square.rank() != expected_rank {
        return Err(malformed(&format!(
            "en-passant square '{en_passant_part}' is on the wrong rank for {side_to_move} to move"
        )));
    }

    let passed_pawn = Piece::new(PieceKind::Pawn, side_to_move.opposite());
    let victim_ok = en_passant_victim_square(square, side_to_move)
        .is_some_and(|victim| board.get(victim) == Some(passed_pawn));
    if !board.is_empty(square) || !victim_ok {
        return Err(malformed(&format!(
            "en-passant square '{en_passant_part}' does not follow a two-square pawn advance"
        )));
    }

    Ok(Some(square))
}

fn malformed(reason: &str) -> ChessErrors {
    ChessErrors::MalformedPosition(reason.to_owned())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state, GameState::new_game());
        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
        assert_eq!(game_state.fullmove_number, 1);
    }

    #[test]
    fn counters_are_optional() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("4-field FEN should parse");
        assert_eq!(game_state.side_to_move, Color::Black);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.fullmove_number, 1);
    }

    #[test]
    fn en_passant_square_is_recomputed_from_text() {
        let game_state = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2")
            .expect("en-passant FEN should parse");
        assert_eq!(game_state.en_passant_square, Square::new(5, 3));
    }

    #[test]
    fn en_passant_square_must_match_the_side_to_move() {
        // Rank 3 target with White to move: no black pawn could have made it.
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1"),
            Err(ChessErrors::MalformedPosition(_))
        ));

        let black_to_move = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1")
            .expect("rank-3 target with a white pawn on e4 is valid");
        assert_eq!(black_to_move.en_passant_square, Square::new(2, 4));
    }

    #[test]
    fn king_of_the_side_not_to_move_cannot_be_in_check() {
        let err = parse_fen("4k3/8/8/8/4R3/8/8/4K3 w - - 0 1")
            .expect_err("white could capture the black king");
        assert!(matches!(err, ChessErrors::MalformedPosition(_)));

        parse_fen("4k3/8/8/8/4R3/8/8/4K3 b - - 0 1").expect("black to move out of check is fine");
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        let bad = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KXkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQ1BNR w kq - 0 1",
            "rnbqkbnr/pppxpppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/45/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1",
            "4k3/8/8/8/4p3/8/8/4K3 w - e3 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - d6 0 1",
            "4k3/8/8/8/4R3/8/8/4K3 w - - 0 1",
        ];

        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessErrors::MalformedPosition(_))),
                "{fen:?} should be rejected"
            );
        }
    }
}
