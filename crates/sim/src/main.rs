// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use log::error;
use std::{path::PathBuf, process::ExitCode, time::Instant};

use pokersim::{Config, StartingHand};
use pokersim_eval::HandCategory;

#[derive(Debug, Parser)]
struct Cli {
    /// A seat starting hand like AH,KD or AH,? or ? for random hole cards.
    #[clap(long, short, required = true)]
    seat: Vec<StartingHand>,
    /// The number of games to play.
    #[clap(long, short, default_value_t = 50_000)]
    games: usize,
    /// The number of parallel tasks.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: u16,
    /// Append a results line to this file.
    #[clap(long, short)]
    results: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        seats: cli.seat,
        games: cli.games,
        tasks: cli.tasks as usize,
    };

    let now = Instant::now();
    let stats = match pokersim::run(&config) {
        Ok(stats) => stats,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let elapsed = now.elapsed().as_secs_f64();
    println!("Total games      {}", stats.games);
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Games/sec:       {:.0}\n", stats.games as f64 / elapsed);

    for category in HandCategory::ALL {
        let name = format!("{category}:");
        println!("{name:<17}{:.5}%", stats.category_rate(category) * 100.0);
    }

    println!();
    for (idx, seat) in config.seats.iter().enumerate() {
        println!(
            "Seat {:<2} {:<8} win {:>9.5}%  split {:>9.5}%",
            idx + 1,
            seat.to_string(),
            stats.win_rate(idx) * 100.0,
            stats.split_rate(idx) * 100.0
        );
    }

    if let Some(path) = cli.results {
        if let Err(e) = stats.append_results(&path, &config) {
            error!("{e:#}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
