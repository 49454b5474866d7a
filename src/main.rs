use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use bitboard_rules::cli::game_loop::run_stdio_loop;
use bitboard_rules::game_state::chess_types::Position;
use bitboard_rules::game_state::zobrist;
use bitboard_rules::move_generation::perft::{perft, perft_counts, perft_divide};

/// Bitboard chess rules core: two-player terminal game and perft driver.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Start from this FEN instead of the initial position.
    #[arg(long)]
    fen: Option<String>,

    /// Count leaf nodes to this depth and exit.
    #[arg(long, value_name = "DEPTH")]
    perft: Option<u8>,

    /// With --perft, print the node count below each root move.
    #[arg(long, requires = "perft")]
    divide: bool,

    /// With --perft, also classify leaf moves (captures, checks, ...).
    #[arg(long, requires = "perft")]
    detailed: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    zobrist::init();

    let mut position = match &args.fen {
        Some(fen) => Position::from_fen(fen).with_context(|| format!("cannot load --fen {fen:?}"))?,
        None => Position::new_game(),
    };

    let Some(depth) = args.perft else {
        if args.divide || args.detailed {
            bail!("--divide and --detailed need --perft <DEPTH>");
        }
        run_stdio_loop(position).context("terminal game failed")?;
        return Ok(());
    };

    info!("perft depth {depth} from {}", position.get_fen());

    if args.divide {
        let divided = perft_divide(&mut position, depth);
        for (mv, nodes) in &divided {
            println!("{mv}: {nodes}");
        }
        println!();
        println!("Moves: {}", divided.len());
        println!("Nodes: {}", divided.iter().map(|(_, nodes)| nodes).sum::<u64>());
    } else if args.detailed {
        let counts = perft_counts(&mut position, depth);
        println!("Nodes:      {}", counts.nodes);
        println!("Captures:   {}", counts.captures);
        println!("En passant: {}", counts.en_passant);
        println!("Castles:    {}", counts.castles);
        println!("Promotions: {}", counts.promotions);
        println!("Checks:     {}", counts.checks);
        println!("Checkmates: {}", counts.checkmates);
    } else {
        println!("{}", perft(&mut position, depth));
    }

    Ok(())
}
