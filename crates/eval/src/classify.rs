// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classifier.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, Error, Hand, HandCategory, Result, detect::HAND_SIZE};

/// The best five cards hand for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandResult {
    /// The hand category.
    pub category: HandCategory,
    /// The five cards ordered from the most to the least significant for
    /// tie breaking within the category.
    pub cards: [Card; HAND_SIZE],
}

impl HandResult {
    /// Classifies a validated hand.
    pub fn from_hand(hand: &Hand) -> Result<Self> {
        let (category, best) = HandCategory::ALL
            .into_iter()
            .find_map(|category| category.detect(hand).map(|cards| (category, cards)))
            .ok_or_else(|| Error::Invariant("no category matched".to_string()))?;

        let cards: [Card; HAND_SIZE] = best.try_into().map_err(|cards: Vec<Card>| {
            Error::Invariant(format!("{category} returned {} cards", cards.len()))
        })?;

        if let Some(card) = cards.iter().find(|c| !hand.cards().contains(c)) {
            return Err(Error::Invariant(format!(
                "{category} returned {card} that is not in the hand"
            )));
        }

        Ok(Self { category, cards })
    }

    /// Compares the value of two hands, a greater hand wins.
    ///
    /// Suits are ignored so two hands with the same category and the same
    /// ranks in the same positions are equal.
    pub fn cmp_strength(&self, other: &HandResult) -> Ordering {
        other.category.cmp(&self.category).then_with(|| {
            let lhs = self.cards.iter().map(|c| c.rank());
            let rhs = other.cards.iter().map(|c| c.rank());
            lhs.cmp(rhs)
        })
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Finds the best five cards hand in 5 to 7 cards.
///
/// Runs the category detectors from royal flush down to high card and
/// returns the first match. Fails with an invalid input error if there are
/// less than 5 or more than 7 cards, or the same card appears twice.
pub fn classify(cards: &[Card]) -> Result<HandResult> {
    let hand = Hand::new(cards)?;
    HandResult::from_hand(&hand)
}
