// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Category detectors.
//!
//! Each detector takes a [Hand] and returns the best five cards hand for its
//! category, ordered from the most to the least significant card for tie
//! breaking, or `None` if the hand doesn't match. Detectors don't know about
//! each other, the [classify](crate::classify) function runs them strongest
//! first so that for example [pair] is only used when [two_pair] and
//! [full_house] didn't match.
use crate::{Card, Hand, Rank, Suit};

/// Number of cards in a ranked hand.
pub const HAND_SIZE: usize = 5;

/// An ace high straight flush.
pub fn royal_flush(hand: &Hand) -> Option<Vec<Card>> {
    straight_flush(hand).filter(|cards| cards[0].rank() == Rank::Ace)
}

/// A straight made only with the cards of a flush suit.
pub fn straight_flush(hand: &Hand) -> Option<Vec<Card>> {
    flush_suits(hand)
        .filter_map(|suit| straight_of(&hand.suited(suit)))
        .max_by_key(|cards| cards[0].rank())
}

/// Four cards of the same rank and the highest kicker.
pub fn four_of_a_kind(hand: &Hand) -> Option<Vec<Card>> {
    let quads = hand.groups_of(4).next()?;

    let mut cards = quads.cards.clone();
    cards.extend(hand.kickers(&[quads.rank], 1));
    Some(cards)
}

/// The highest three of a kind with the highest pair of another rank.
///
/// The pair can come from a second three of a kind.
pub fn full_house(hand: &Hand) -> Option<Vec<Card>> {
    let trips = hand.groups_of(3).next()?;
    let pair = hand
        .groups()
        .iter()
        .find(|g| g.rank != trips.rank && g.len() >= 2)?;

    let mut cards = trips.cards.clone();
    cards.extend_from_slice(&pair.cards[..2]);
    Some(cards)
}

/// The five highest cards of a suit.
pub fn flush(hand: &Hand) -> Option<Vec<Card>> {
    flush_suits(hand)
        .map(|suit| {
            let mut cards = hand.suited(suit);
            cards.truncate(HAND_SIZE);
            cards
        })
        .max_by(|a, b| ranks(a).cmp(ranks(b)))
}

/// Five cards with consecutive ranks, the ace can play low in A-2-3-4-5.
pub fn straight(hand: &Hand) -> Option<Vec<Card>> {
    straight_of(hand.cards())
}

/// The highest three of a kind with two kickers.
pub fn three_of_a_kind(hand: &Hand) -> Option<Vec<Card>> {
    let trips = hand.groups_of(3).next()?;

    let mut cards = trips.cards.clone();
    cards.extend(hand.kickers(&[trips.rank], 2));
    Some(cards)
}

/// The two highest pairs with one kicker.
pub fn two_pair(hand: &Hand) -> Option<Vec<Card>> {
    let mut pairs = hand.groups_of(2);
    let high = pairs.next()?;
    let low = pairs.next()?;

    let mut cards = high.cards.clone();
    cards.extend_from_slice(&low.cards);
    cards.extend(hand.kickers(&[high.rank, low.rank], 1));
    Some(cards)
}

/// The highest pair with three kickers.
pub fn pair(hand: &Hand) -> Option<Vec<Card>> {
    let pair = hand.groups_of(2).next()?;

    let mut cards = pair.cards.clone();
    cards.extend(hand.kickers(&[pair.rank], 3));
    Some(cards)
}

/// The five highest cards, always matches.
pub fn high_card(hand: &Hand) -> Option<Vec<Card>> {
    Some(hand.cards().iter().take(HAND_SIZE).copied().collect())
}

/// Suits with at least five cards.
fn flush_suits(hand: &Hand) -> impl Iterator<Item = Suit> + '_ {
    Suit::suits().filter(|&suit| {
        hand.cards().iter().filter(|c| c.suit() == suit).count() >= HAND_SIZE
    })
}

fn ranks(cards: &[Card]) -> impl Iterator<Item = Rank> + '_ {
    cards.iter().map(|c| c.rank())
}

/// Finds the highest straight in cards sorted in descending order.
fn straight_of(cards: &[Card]) -> Option<Vec<Card>> {
    // One card per rank value, slot 1 is the ace playing low.
    let mut slots = [None; 15];
    for c in cards {
        slots[c.rank().value() as usize].get_or_insert(*c);
    }
    slots[1] = slots[Rank::Ace.value() as usize];

    (HAND_SIZE..slots.len()).rev().find_map(|top| {
        slots[top + 1 - HAND_SIZE..=top]
            .iter()
            .rev()
            .copied()
            .collect::<Option<Vec<Card>>>()
    })
}
