//! Fixed catalog of ten mate puzzles.
//!
//! Records are static data. Solution labels are standard algebraic text for
//! hint display only and are never parsed by the engine.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::difficulty::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleRecord {
    pub id: u32,
    pub name: &'static str,
    pub theme: &'static str,
    pub difficulty: Difficulty,
    pub fen: &'static str,
    pub description: &'static str,
    /// Intended line, alternating sides, starting with the side to move.
    pub solution: &'static [&'static str],
    /// Moves to mate for the solving side, 0 for a purely tactical line.
    pub mate_in: u8,
}

pub static PUZZLES: [PuzzleRecord; 10] = [
    PuzzleRecord {
        id: 1,
        name: "Back Rank Mate",
        theme: "back-rank",
        difficulty: Difficulty::Easy,
        fen: "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1",
        description: "The black king is boxed in by its own pawns. Use the open file.",
        solution: &["Ra8#"],
        mate_in: 1,
    },
    PuzzleRecord {
        id: 2,
        name: "Smothered Mate",
        theme: "smothered",
        difficulty: Difficulty::Medium,
        fen: "6rk/6pp/8/6N1/8/8/8/6K1 w - - 0 1",
        description: "The king is surrounded by its own pieces. A knight finishes it.",
        solution: &["Nf7#"],
        mate_in: 1,
    },
    PuzzleRecord {
        id: 3,
        name: "Boden's Mate",
        theme: "boden",
        difficulty: Difficulty::Medium,
        fen: "2kr4/p2p4/8/8/5B2/8/4B3/6K1 w - - 0 1",
        description: "Two bishops on crossing diagonals trap the castled king.",
        solution: &["Ba6#"],
        mate_in: 1,
    },
    PuzzleRecord {
        id: 4,
        name: "Greek Gift",
        theme: "greek-gift",
        difficulty: Difficulty::Hard,
        fen: "r1bq1rk1/pppn1ppp/4p3/3pP3/1b1P4/2NB1N2/PPP2PPP/R2QK2R w KQ - 0 1",
        description: "Sacrifice the bishop on h7 and bring the knight and queen in behind it.",
        solution: &["Bxh7+", "Kxh7", "Ng5+", "Kg8", "Qh5"],
        mate_in: 0,
    },
    PuzzleRecord {
        id: 5,
        name: "Rook Ending Zugzwang",
        theme: "zugzwang",
        difficulty: Difficulty::Hard,
        fen: "7k/8/5K2/8/8/8/8/6R1 w - - 0 1",
        description: "Take away the last flight square and let Black run out of moves.",
        solution: &["Kf7", "Kh7", "Rh1#"],
        mate_in: 2,
    },
    PuzzleRecord {
        id: 6,
        name: "Scholar's Mate",
        theme: "opening-trap",
        difficulty: Difficulty::Easy,
        fen: "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        description: "Queen and bishop both aim at the weak f7 square.",
        solution: &["Qxf7#"],
        mate_in: 1,
    },
    PuzzleRecord {
        id: 7,
        name: "Anastasia's Mate",
        theme: "anastasia",
        difficulty: Difficulty::Medium,
        fen: "r7/pp2N1pk/8/8/8/1R6/5PPP/2K5 w - - 0 1",
        description: "The knight seals the king on the edge; the rook delivers along the h-file.",
        solution: &["Rh3#"],
        mate_in: 1,
    },
    PuzzleRecord {
        id: 8,
        name: "Arabian Mate",
        theme: "arabian",
        difficulty: Difficulty::Medium,
        fen: "r6k/1R6/p4N2/8/8/8/PP6/1K6 w - - 0 1",
        description: "Rook and knight cooperate against the cornered king.",
        solution: &["Rh7#"],
        mate_in: 1,
    },
    PuzzleRecord {
        id: 9,
        name: "Opera Mate",
        theme: "queen-sacrifice",
        difficulty: Difficulty::Hard,
        fen: "4kb1r/p2n1ppp/4q3/4p1B1/4P3/1Q6/PPP2PPP/2KR4 w k - 1 17",
        description: "Give up the queen to drag the knight away from d8.",
        solution: &["Qb8+", "Nxb8", "Rd8#"],
        mate_in: 2,
    },
    PuzzleRecord {
        id: 10,
        name: "Fool's Mate",
        theme: "opening-trap",
        difficulty: Difficulty::Easy,
        fen: "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
        description: "White has weakened the e1-h4 diagonal. Black to move.",
        solution: &["Qh4#"],
        mate_in: 1,
    },
];

pub fn all_puzzles() -> &'static [PuzzleRecord] {
    &PUZZLES
}

pub fn get_puzzle_by_id(id: u32) -> Result<&'static PuzzleRecord, ChessErrors> {
    PUZZLES
        .iter()
        .find(|puzzle| puzzle.id == id)
        .ok_or_else(|| ChessErrors::PuzzleNotFound(format!("no puzzle with id {id}")))
}

pub fn puzzles_by_difficulty(
    difficulty: Difficulty,
) -> impl Iterator<Item = &'static PuzzleRecord> {
    PUZZLES
        .iter()
        .filter(move |puzzle| puzzle.difficulty == difficulty)
}

/// Uniform pick among puzzles of `difficulty`, or among all puzzles.
pub fn get_random_puzzle(
    difficulty: Option<Difficulty>,
) -> Result<&'static PuzzleRecord, ChessErrors> {
    get_random_puzzle_with_rng(difficulty, &mut rand::rng())
}

pub fn get_random_puzzle_with_rng<R: Rng + ?Sized>(
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> Result<&'static PuzzleRecord, ChessErrors> {
    let candidates: Vec<&'static PuzzleRecord> = match difficulty {
        Some(tier) => puzzles_by_difficulty(tier).collect(),
        None => PUZZLES.iter().collect(),
    };

    let picked = candidates.choose(rng).copied().ok_or_else(|| {
        ChessErrors::PuzzleNotFound(format!(
            "no puzzle for difficulty {}",
            difficulty.map_or_else(|| "any".to_owned(), |tier| tier.to_string())
        ))
    })?;

    debug!(id = picked.id, name = picked.name, "random puzzle selected");
    Ok(picked)
}
