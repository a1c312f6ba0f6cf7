use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use slither_core::*;

mod summary;

/// Plays a scripted game of snake and prints the resulting board.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Compressed board, e.g. `B3x5|W5|W1S1E2W1|W5`; the built-in 20x10 board is used otherwise
    #[arg(short, long, conflicts_with = "board_file")]
    board: Option<String>,

    /// Read the compressed board from a file
    #[arg(long)]
    board_file: Option<PathBuf>,

    /// One character per tick: U, D, L, R (any case) or `.` to keep going; whitespace is skipped
    #[arg(short, long, default_value = "")]
    moves: String,

    /// Eating moves the snake without making it longer
    #[arg(long)]
    no_grow: bool,

    /// Running into the snake's own body ends the game
    #[arg(long)]
    body_collision: bool,

    /// Ignore input that points straight back at the neck
    #[arg(long)]
    reversal_guard: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player name shown in the summary
    #[arg(short, long)]
    name: Option<String>,

    /// Print every tick, not only the final board
    #[arg(long)]
    trace: bool,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    name: Option<&'a str>,
    seed: u64,
    ticks: usize,
    state: &'a GameState,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let name = args.name.as_deref().map(summary::player_name).transpose()?;
    let inputs = parse_moves(&args.moves)?;
    let board = load_board(&args)?;
    let rules = Rules {
        growing: !args.no_grow,
        body_collision: args.body_collision,
        reversal_guard: args.reversal_guard,
    };

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);
    let mut source = SeededIndexSource::new(seed);
    let mut game = GameState::new(board, rules, &mut source).context("Could not start game")?;

    let mut ticks = 0;
    for input in inputs {
        let outcome = game.tick(input, &mut source);
        ticks += 1;
        if args.trace && outcome.has_update() {
            println!("tick {ticks}: {input:?} -> {outcome:?}");
            print!("{}", game.view());
        }
        if outcome.ends_game() {
            break;
        }
    }

    if args.json {
        let snapshot = Snapshot {
            name: name.as_deref(),
            seed,
            ticks,
            state: &game,
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        if !args.trace {
            print!("{}", game.view());
        }
        print!("{}", summary::render(name.as_deref(), &game));
    }
    Ok(())
}

fn load_board(args: &Args) -> Result<Board> {
    let board = if let Some(path) = &args.board_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read board file {}", path.display()))?;
        CompressedBoard(&text).build()
    } else if let Some(text) = &args.board {
        CompressedBoard(text).build()
    } else {
        DefaultBoard.build()
    };
    board.context("Invalid board")
}

fn parse_moves(moves: &str) -> Result<Vec<Input>> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match Input::from_char(c) {
            Some(input) => Ok(input),
            None => bail!("Unknown move {c:?}, expected one of U D L R ."),
        })
        .collect()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
