// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Hand, detect};

/// One of the ten poker hand categories.
///
/// The discriminant is the category strength where 0 is the strongest, so a
/// category that compares less than another beats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// Ace high straight flush.
    RoyalFlush = 0,
    /// Five consecutive cards of the same suit.
    StraightFlush,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three of a kind with a pair.
    FullHouse,
    /// Five cards of the same suit.
    Flush,
    /// Five consecutive cards.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two different pairs.
    TwoPair,
    /// Two cards of the same rank.
    Pair,
    /// None of the above.
    HighCard,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// All categories in detection order, strongest first.
    pub const ALL: [HandCategory; Self::COUNT] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::Pair,
        HandCategory::HighCard,
    ];

    /// The category strength, 0 for a royal flush to 9 for high card.
    pub const fn strength(self) -> usize {
        self as usize
    }

    /// Runs this category detector on a hand.
    ///
    /// Returns the five best cards for this category ordered for tie breaking
    /// or `None` if the hand doesn't match the category.
    pub fn detect(self, hand: &Hand) -> Option<Vec<Card>> {
        let detector: fn(&Hand) -> Option<Vec<Card>> = match self {
            HandCategory::RoyalFlush => detect::royal_flush,
            HandCategory::StraightFlush => detect::straight_flush,
            HandCategory::FourOfAKind => detect::four_of_a_kind,
            HandCategory::FullHouse => detect::full_house,
            HandCategory::Flush => detect::flush,
            HandCategory::Straight => detect::straight,
            HandCategory::ThreeOfAKind => detect::three_of_a_kind,
            HandCategory::TwoPair => detect::two_pair,
            HandCategory::Pair => detect::pair,
            HandCategory::HighCard => detect::high_card,
        };

        detector(hand)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        };

        write!(f, "{name}")
    }
}
