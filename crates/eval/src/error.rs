// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::Card;

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the classifier and the showdown resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A hand must have 5 to 7 cards.
    #[error("a hand needs 5 to 7 cards, got {0}")]
    CardCount(usize),
    /// The same card appears twice in a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A showdown without players.
    #[error("no hands to compare")]
    NoHands,
    /// A detector or the resolver broke one of its own invariants.
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

impl Error {
    /// Checks if this error was caused by the caller input.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::Invariant(_))
    }
}
