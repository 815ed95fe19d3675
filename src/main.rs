//! Sentinel Mind demo driver.
//!
//! Usage: `sentinel_mind [depth] [time_limit_ms] [fen...]`. The FEN's side to
//! move is the side searched. Set `RUST_LOG=sentinel_mind=debug` (or `trace`)
//! for the search trace.

use std::env;
use std::process::ExitCode;
use std::time::Duration;

use log::{error, info, Level};
use sentinel_mind::{MinimaxEngine, Position};

const DEMO_FEN: &str = "3B1k2/b1K1p3/8/1b4p1/pr2P1R1/2P3P1/2P5/4N1R1 w - - 0 1";

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> T {
    args.get(idx)
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let depth: u8 = parse_arg(&args, 1, 5u8);
    let time_limit_ms: u64 = parse_arg(&args, 2, 0u64);
    let fen = if args.len() > 3 {
        args[3..].join(" ")
    } else {
        DEMO_FEN.to_owned()
    };

    let mut position = match Position::from_fen(&fen) {
        Ok(position) => position,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    println!("{position}\n");

    let color = position.side_to_move;
    let mut engine = MinimaxEngine::new();
    engine.verbose = log::log_enabled!(target: "sentinel_mind", Level::Debug);
    engine.time_limit = Some(Duration::from_millis(time_limit_ms));

    info!("searching {color:?} to depth {depth}");
    let best = engine.find_best_move(&position, color, depth);
    let stats = engine.stats();

    match best {
        Some(mv) => {
            if let Err(err) = position.apply_move(&mv) {
                error!("could not apply {mv}: {err}");
                return ExitCode::FAILURE;
            }
            println!("best move: {mv}");
            println!("score: {}", stats.best_score.unwrap_or_default());
        }
        None => println!("no move available"),
    }
    println!(
        "nodes: {}  time: {:?}  last leaf score: {}",
        stats.nodes, stats.elapsed, stats.last_score
    );
    if best.is_some() {
        println!("\n{position}\n{}", position.to_fen());
    }

    ExitCode::SUCCESS
}
