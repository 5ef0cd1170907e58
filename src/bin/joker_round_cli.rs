// src/bin/joker_round_cli.rs

use std::error::Error;
use std::io;

use clap::Parser;

use joker_ante_engine::api::build_round_summary;
use joker_ante_engine::cli::{Args, ConsoleNarrator};
use joker_ante_engine::engine::play_round;
use joker_ante_engine::infra::{init_logging, level_for_verbosity, RoundRng};

fn main() {
    let args = Args::parse();

    if let Err(err) = init_logging(level_for_verbosity(args.verbose)) {
        eprintln!("logger init failed: {err}");
    }

    if let Err(err) = run(&args) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.game_config()?;
    log::info!(
        "config: {} player(s), max bet {}, bankroll {}, ante {}, seed {:?}",
        config.players.len(),
        config.max_bet,
        config.bankroll,
        config.ante,
        config.seed
    );

    let mut players = config.seat_players();
    let mut rng = RoundRng::new(config.seed);
    let mut bets = args.bet_source(config.max_bet)?;

    if args.json {
        // stdout остаётся чистым JSON, рассказ уходит в stderr.
        let mut narrator = ConsoleNarrator::new(io::stderr());
        play_round(
            &mut players,
            &config.rules(),
            &mut rng,
            bets.as_mut(),
            &mut narrator,
        )?;
        let summary = build_round_summary(&players, config.seed);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let mut narrator = ConsoleNarrator::new(io::stdout());
        play_round(
            &mut players,
            &config.rules(),
            &mut rng,
            bets.as_mut(),
            &mut narrator,
        )?;
        let summary = build_round_summary(&players, config.seed);
        print!("\n{summary}");
    }

    Ok(())
}
