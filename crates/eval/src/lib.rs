// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker simulator hand classifier and showdown resolver.
//!
//! Given the 5 to 7 cards a player holds at showdown (hole cards plus board)
//! [classify] finds the best five cards hand, its [HandCategory], and orders
//! the five cards from the most to the least significant for tie breaking:
//!
//! ```
//! # use pokersim_eval::*;
//! let cards = ["AS", "2D", "3C", "4H", "5S", "9C", "KD"]
//!     .iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let res = classify(&cards).unwrap();
//! assert_eq!(res.category, HandCategory::Straight);
//! assert_eq!(res.to_string(), "Straight [5S 4H 3C 2D AS]");
//! ```
//!
//! With one result per player [resolve_showdown] picks the winner, or the
//! players splitting the pot:
//!
//! ```
//! # use pokersim_eval::*;
//! # fn cards(s: &str) -> Vec<Card> {
//! #     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
//! # }
//! let p1 = classify(&cards("QH QC 9S 9D 7C 4H 2D")).unwrap();
//! let p2 = classify(&cards("JH JC 9S AD 7C 4H 2D")).unwrap();
//! assert_eq!(resolve_showdown(&[p1, p2]).unwrap(), Outcome::Winner(0));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod category;
pub use category::HandCategory;

mod classify;
pub use classify::{HandResult, classify};

pub mod detect;

mod error;
pub use error::{Error, Result};

mod hand;
pub use hand::{Group, Hand};

mod showdown;
pub use showdown::{Outcome, resolve_showdown};

// Reexport cards types.
pub use pokersim_cards::{Card, Deck, Rank, Suit};
