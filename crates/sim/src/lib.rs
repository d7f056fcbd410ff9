// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo Texas Hold'em showdown simulator.
//!
//! Deals many random boards, and any hole cards not given by the seats, then
//! classifies every player hand and resolves the showdown to count how often
//! each hand category shows up and how often each seat wins or splits.
//!
//! ```
//! # use pokersim::{Config, StartingHand, run};
//! let config = Config {
//!     seats: vec!["AH,AD".parse().unwrap(), "?".parse().unwrap()],
//!     games: 100,
//!     tasks: 2,
//! };
//!
//! let stats = run(&config).unwrap();
//! assert_eq!(stats.games, 100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod seat;
pub use seat::StartingHand;

pub mod sim;
pub use sim::{Config, Stats, play_deal, run};
