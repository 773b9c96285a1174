use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lock_chess::chess_errors::ChessErrors;
use lock_chess::config::LockChessConfig;
use lock_chess::difficulty::Difficulty;
use lock_chess::engines::chess_ai::ChessAi;
use lock_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use lock_chess::game_state::chess_types::{Color, GameState};
use lock_chess::move_generation::perft::perft;
use lock_chess::puzzles::puzzle_catalog::{get_puzzle_by_id, get_random_puzzle_with_rng};
use lock_chess::utils::long_algebraic::parse_move;
use lock_chess::utils::render_game_state::render_game_state;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "lock_chess")]
#[command(about = "Chess rules engine, puzzle catalog and tiered AI", long_about = None)]
struct Cli {
    /// TOML settings file; command-line flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a puzzle by id, or a random one
    Puzzle {
        #[arg(long)]
        id: Option<u32>,
        /// Restrict random selection to easy, medium or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        show_solution: bool,
    },
    /// Ask the AI for a move in a position
    Bestmove {
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        depth: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play against the AI on the terminal, moves as `e2e4` / `e7e8q`
    Play {
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Side the AI plays: white or black
        #[arg(long, value_parser = parse_color)]
        ai_color: Option<Color>,
        #[arg(long)]
        fen: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        #[arg(short, long, default_value = "3")]
        depth: u8,
    },
}

fn parse_color(text: &str) -> Result<Color, String> {
    match text.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => Err(format!("unknown color '{other}'")),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ChessErrors> {
    let mut config = match &cli.config {
        Some(path) => LockChessConfig::from_path(path)?,
        None => LockChessConfig::default(),
    };

    match cli.command {
        Command::Puzzle {
            id,
            difficulty,
            seed,
            show_solution,
        } => {
            let puzzle = match id {
                Some(id) => get_puzzle_by_id(id)?,
                None => {
                    let filter = difficulty.or(config.puzzle.difficulty);
                    let mut rng = seeded_rng(seed.or(config.ai.seed));
                    get_random_puzzle_with_rng(filter, &mut rng)?
                }
            };

            let mut game = GameState::new_game();
            game.load_puzzle(puzzle)?;

            println!("#{} {} [{}] ({})", puzzle.id, puzzle.name, puzzle.theme, puzzle.difficulty);
            println!("{}", puzzle.description);
            println!("{}", render_game_state(&game));
            println!("{} to move. FEN: {}", game.side_to_move, puzzle.fen);
            if show_solution {
                println!("Solution: {}", puzzle.solution.join(" "));
            }
        }
        Command::Bestmove {
            fen,
            difficulty,
            depth,
            seed,
        } => {
            let mut game = GameState::from_fen(&fen)?;
            apply_ai_overrides(&mut config, difficulty, depth, seed)?;
            config.ai.color = game.side_to_move;

            let mut ai = ChessAi::with_config(&config.ai);
            let out = ai.analyze(&mut game)?;
            for line in &out.info_lines {
                info!("{line}");
            }
            println!("bestmove {}", out.best_move);
        }
        Command::Play {
            difficulty,
            ai_color,
            fen,
            seed,
        } => {
            apply_ai_overrides(&mut config, difficulty, None, seed)?;
            if let Some(color) = ai_color {
                config.ai.color = color;
            }
            let game = match fen {
                Some(fen) => GameState::from_fen(&fen)?,
                None => GameState::new_game(),
            };
            play(game, ChessAi::with_config(&config.ai))?;
        }
        Command::Perft { fen, depth } => {
            let mut game = GameState::from_fen(&fen)?;
            let counts = perft(&mut game, depth);
            println!(
                "depth {depth}: nodes {} captures {} en_passant {} castles {} promotions {}",
                counts.nodes, counts.captures, counts.en_passant, counts.castles, counts.promotions
            );
        }
    }

    Ok(())
}

fn apply_ai_overrides(
    config: &mut LockChessConfig,
    difficulty: Option<Difficulty>,
    depth: Option<u8>,
    seed: Option<u64>,
) -> Result<(), ChessErrors> {
    if let Some(difficulty) = difficulty {
        config.ai.difficulty = difficulty;
    }
    if let Some(depth) = depth {
        config.ai.search_depth = depth;
    }
    if seed.is_some() {
        config.ai.seed = seed;
    }
    config.validate()
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn play(mut game: GameState, mut ai: ChessAi) -> Result<(), ChessErrors> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render_game_state(&game));

        if game.is_checkmate() {
            println!("Checkmate. {} wins.", game.side_to_move.opposite());
            return Ok(());
        }
        if game.is_stalemate() {
            println!("Stalemate.");
            return Ok(());
        }

        if game.side_to_move == ai.color() {
            let mv = ai.get_best_move(&mut game)?;
            game.make_move(mv)?;
            println!("{} ({}) plays {mv}", ai.engine_name(), ai.difficulty());
            continue;
        }

        if game.is_in_check(game.side_to_move) {
            println!("Check!");
        }
        print!("{} to move (e2e4, undo, fen, quit): ", game.side_to_move);
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            return Ok(());
        };

        match line.trim() {
            "" => {}
            "quit" | "exit" => return Ok(()),
            "fen" => println!("{}", game.to_fen()),
            "undo" => {
                // Take back the AI reply too so it is the human's turn again.
                for _ in 0..2 {
                    if game.undo_last_move().is_err() {
                        break;
                    }
                }
            }
            text => match parse_move(text).and_then(|mv| game.make_move(mv)) {
                Ok(()) => {}
                Err(err) => println!("{err}"),
            },
        }
    }
}
