// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo showdown simulation.
use ahash::AHashSet;
use anyhow::{Context, Result, bail};
use log::{error, info};
use std::{
    fs::OpenOptions,
    io::Write,
    path::Path,
    sync::atomic::{AtomicU64, Ordering},
};

use pokersim_cards::{Card, Deck};
use pokersim_eval::{HandCategory, HandResult, Outcome, classify, resolve_showdown};

use crate::StartingHand;

/// Number of board cards.
pub const BOARD_SIZE: usize = 5;

/// Maximum number of seats at a table.
pub const MAX_SEATS: usize = 10;

/// Simulation config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The seats starting hands.
    pub seats: Vec<StartingHand>,
    /// The number of games to play, rounded up to a multiple of tasks.
    pub games: usize,
    /// The number of parallel tasks.
    pub tasks: usize,
}

impl Config {
    /// Checks the config is playable.
    pub fn validate(&self) -> Result<()> {
        if self.seats.is_empty() {
            bail!("At least one seat is required");
        }

        if self.seats.len() > MAX_SEATS {
            bail!("At most {MAX_SEATS} seats, got {}", self.seats.len());
        }

        if self.games == 0 {
            bail!("The number of games must be positive");
        }

        if self.tasks == 0 {
            bail!("The number of tasks must be positive");
        }

        let mut reserved = AHashSet::default();
        for card in self.seats.iter().flat_map(|s| s.known()) {
            if !reserved.insert(card) {
                bail!("Card {card} is used by more than one seat");
            }
        }

        Ok(())
    }

    /// The hole cards given by the seats.
    pub fn reserved(&self) -> impl Iterator<Item = Card> + '_ {
        self.seats.iter().flat_map(|s| s.known())
    }

    /// Number of cards sampled from the deck for each game.
    fn sample_size(&self) -> usize {
        self.seats.iter().map(|s| s.unknown()).sum::<usize>() + BOARD_SIZE
    }
}

/// Simulation statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of games played.
    pub games: u64,
    /// Number of player hands in each category, indexed by category strength.
    pub categories: [u64; HandCategory::COUNT],
    /// Number of games each seat won outright.
    pub wins: Vec<u64>,
    /// Number of games each seat split with other seats.
    pub splits: Vec<u64>,
    /// Number of games whose evaluation failed.
    pub failed: u64,
}

impl Stats {
    /// The number of evaluated player hands.
    pub fn hands(&self) -> u64 {
        self.categories.iter().sum()
    }

    /// The fraction of player hands in the given category.
    pub fn category_rate(&self, category: HandCategory) -> f64 {
        ratio(self.categories[category.strength()], self.hands())
    }

    /// The fraction of games a seat won outright.
    pub fn win_rate(&self, seat: usize) -> f64 {
        ratio(self.wins.get(seat).copied().unwrap_or_default(), self.games)
    }

    /// The fraction of games a seat split.
    pub fn split_rate(&self, seat: usize) -> f64 {
        ratio(self.splits.get(seat).copied().unwrap_or_default(), self.games)
    }

    /// Appends a results line to a file.
    ///
    /// The line has the number of seats, the number of games, the win rate
    /// of each seat, and the starting hand of each seat, comma separated.
    pub fn append_results<P: AsRef<Path>>(&self, path: P, config: &Config) -> Result<()> {
        let path = path.as_ref();
        let mut fields = vec![config.seats.len().to_string(), self.games.to_string()];
        fields.extend((0..config.seats.len()).map(|s| format!("{:.5}", self.win_rate(s))));
        fields.extend(config.seats.iter().map(|s| s.to_string()));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Cannot open results file {}", path.display()))?;
        writeln!(file, "{}", fields.join(", "))
            .with_context(|| format!("Cannot write results file {}", path.display()))?;

        Ok(())
    }
}

fn ratio(n: u64, d: u64) -> f64 {
    if d == 0 { 0.0 } else { n as f64 / d as f64 }
}

/// Per task counters to avoid contention.
struct Counters {
    games: AtomicU64,
    failed: AtomicU64,
    categories: [AtomicU64; HandCategory::COUNT],
    wins: Vec<AtomicU64>,
    splits: Vec<AtomicU64>,
}

impl Counters {
    fn new(seats: usize) -> Self {
        Self {
            games: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            categories: Default::default(),
            wins: (0..seats).map(|_| AtomicU64::new(0)).collect(),
            splits: (0..seats).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    fn record(&self, results: &[HandResult], outcome: &Outcome) {
        self.games.fetch_add(1, Ordering::Relaxed);

        for res in results {
            self.categories[res.category.strength()].fetch_add(1, Ordering::Relaxed);
        }

        match outcome {
            Outcome::Winner(seat) => {
                self.wins[*seat].fetch_add(1, Ordering::Relaxed);
            }
            Outcome::Split(seats) => {
                for seat in seats {
                    self.splits[*seat].fetch_add(1, Ordering::Relaxed);
                }
            }
        }
    }

    fn record_failure(&self) {
        self.games.fetch_add(1, Ordering::Relaxed);
        self.failed.fetch_add(1, Ordering::Relaxed);
    }
}

fn load(counters: &[Counters], f: impl Fn(&Counters) -> &AtomicU64) -> u64 {
    counters.iter().map(|c| f(c).load(Ordering::Relaxed)).sum()
}

/// Plays one game given the sampled cards.
///
/// The sample has the random hole cards for the seats, in seat order, followed
/// by the board cards.
pub fn play_deal(
    seats: &[StartingHand],
    sample: &[Card],
) -> pokersim_eval::Result<(Vec<HandResult>, Outcome)> {
    let (holes, board) = sample.split_at(sample.len().saturating_sub(BOARD_SIZE));
    let mut holes = holes.iter();

    let results = seats
        .iter()
        .map(|seat| {
            let mut hand = Vec::with_capacity(BOARD_SIZE + 2);
            for card in seat.cards() {
                match card {
                    Some(card) => hand.push(card),
                    None => hand.extend(holes.next()),
                }
            }

            hand.extend_from_slice(board);
            classify(&hand)
        })
        .collect::<pokersim_eval::Result<Vec<_>>>()?;

    let outcome = resolve_showdown(&results)?;
    Ok((results, outcome))
}

/// Runs the simulation.
pub fn run(config: &Config) -> Result<Stats> {
    config.validate()?;

    let mut deck = Deck::default();
    for card in config.reserved() {
        deck.remove(card);
    }

    let sample_size = config.sample_size();
    let games_per_task = config.games.div_ceil(config.tasks);

    info!(
        "Playing {} games for {} seats with {} tasks",
        games_per_task * config.tasks,
        config.seats.len(),
        config.tasks
    );

    let task_counters = (0..config.tasks)
        .map(|_| Counters::new(config.seats.len()))
        .collect::<Vec<_>>();

    deck.par_sample(config.tasks, games_per_task, sample_size, |task_id, sample| {
        let counters = &task_counters[task_id];
        match play_deal(&config.seats, sample) {
            Ok((results, outcome)) => counters.record(&results, &outcome),
            Err(e) => {
                error!("Deal {sample:?} failed: {e}");
                counters.record_failure();
            }
        }
    });

    // Aggregate counters.
    let stats = Stats {
        games: load(&task_counters, |c| &c.games),
        categories: std::array::from_fn(|idx| load(&task_counters, |c| &c.categories[idx])),
        wins: (0..config.seats.len())
            .map(|seat| load(&task_counters, |c| &c.wins[seat]))
            .collect(),
        splits: (0..config.seats.len())
            .map(|seat| load(&task_counters, |c| &c.splits[seat]))
            .collect(),
        failed: load(&task_counters, |c| &c.failed),
    };

    if stats.failed > 0 {
        error!("{} of {} games failed", stats.failed, stats.games);
    }

    Ok(stats)
}
