// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player hand at showdown.
use ahash::AHashSet;
use std::cmp::Reverse;

use crate::{Card, Error, Rank, Result, Suit};

/// Cards of the same rank in a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The group rank.
    pub rank: Rank,
    /// The group cards, in descending order.
    pub cards: Vec<Card>,
}

impl Group {
    /// The number of cards in this group.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the group is empty, never true for a group in a [Hand].
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The 5 to 7 cards a player holds at showdown.
///
/// Cards are stored in descending order, by rank and then by suit, and
/// grouped by rank once on construction so that detectors can pick from all
/// the duplicate groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    groups: Vec<Group>,
}

impl Hand {
    /// The minimum number of cards in a hand.
    pub const MIN_CARDS: usize = 5;

    /// The maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 7;

    /// Creates a hand checking the number of cards and that there are no
    /// duplicates.
    pub fn new(cards: &[Card]) -> Result<Self> {
        if !(Self::MIN_CARDS..=Self::MAX_CARDS).contains(&cards.len()) {
            return Err(Error::CardCount(cards.len()));
        }

        let mut seen = AHashSet::with_capacity(cards.len());
        if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(Error::DuplicateCard(*dup));
        }

        let mut cards = cards.to_vec();
        cards.sort_unstable_by_key(|c| Reverse(*c));

        // Cards are sorted so equal ranks are next to each other.
        let groups = cards
            .chunk_by(|a, b| a.rank() == b.rank())
            .map(|chunk| Group {
                rank: chunk[0].rank(),
                cards: chunk.to_vec(),
            })
            .collect();

        Ok(Self { cards, groups })
    }

    /// The hand cards in descending order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All rank groups in descending rank order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Groups with exactly `n` cards in descending rank order.
    pub fn groups_of(&self, n: usize) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(move |g| g.len() == n)
    }

    /// The hand cards of the given suit in descending order.
    pub fn suited(&self, suit: Suit) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| c.suit() == suit)
            .copied()
            .collect()
    }

    /// The `n` highest cards whose rank is not in `used`.
    pub fn kickers(&self, used: &[Rank], n: usize) -> impl Iterator<Item = Card> {
        self.cards
            .iter()
            .filter(move |c| !used.contains(&c.rank()))
            .take(n)
            .copied()
    }
}
