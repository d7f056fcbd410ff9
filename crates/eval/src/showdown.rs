// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown resolution.
use log::debug;
use serde::{Deserialize, Serialize};
use std::slice;

use crate::{Error, HandResult, Result, detect::HAND_SIZE};

/// The result of a showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The index of the player with the best hand.
    Winner(usize),
    /// The indices, in ascending order, of the players that have exactly
    /// equal best hands and split the pot.
    Split(Vec<usize>),
}

impl Outcome {
    /// The winning player indices.
    pub fn winners(&self) -> &[usize] {
        match self {
            Outcome::Winner(idx) => slice::from_ref(idx),
            Outcome::Split(players) => players,
        }
    }
}

/// Finds the winner among the players hands.
///
/// The players with the strongest category are the candidates, if there is
/// more than one the candidates are compared card by card in ranked order,
/// keeping at each position only those with the highest rank, until one
/// candidate is left. If candidates are still tied after the fifth card the
/// pot is split among them.
pub fn resolve_showdown(results: &[HandResult]) -> Result<Outcome> {
    let best = results
        .iter()
        .map(|r| r.category)
        .min()
        .ok_or(Error::NoHands)?;

    let mut candidates = results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.category == best)
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    for pos in 0..HAND_SIZE {
        if candidates.len() <= 1 {
            break;
        }

        let Some(top) = candidates
            .iter()
            .map(|&idx| results[idx].cards[pos].rank())
            .max()
        else {
            break;
        };

        candidates.retain(|&idx| results[idx].cards[pos].rank() == top);
        debug!("{best} showdown card {pos}: {top} kept players {candidates:?}");
    }

    match candidates.len() {
        0 => Err(Error::Invariant(format!("no {best} hand left at showdown"))),
        1 => Ok(Outcome::Winner(candidates[0])),
        _ => Ok(Outcome::Split(candidates)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Deck, HandCategory, classify};
    use std::cmp::Ordering;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn res(s: &str) -> HandResult {
        classify(&cards(s)).unwrap()
    }

    #[test]
    fn showdown_empty() {
        let err = resolve_showdown(&[]).unwrap_err();
        assert_eq!(err, Error::NoHands);
        assert!(err.is_invalid_input());
    }

    #[test]
    fn showdown_single_player() {
        let p = res("JH QC 9S AD 7C 4H 2D");
        assert_eq!(resolve_showdown(&[p]), Ok(Outcome::Winner(0)));
    }

    #[test]
    fn showdown_category_wins() {
        // The pair of jacks has better kickers but two pair wins.
        let pair = res("JH JC AS KD QC 4H 2D");
        let two_pair = res("QH QC 9S 9D 3C 4H 2D");
        assert_eq!(pair.category, HandCategory::Pair);
        assert_eq!(two_pair.category, HandCategory::TwoPair);

        assert_eq!(resolve_showdown(&[pair, two_pair]), Ok(Outcome::Winner(1)));
        assert_eq!(resolve_showdown(&[two_pair, pair]), Ok(Outcome::Winner(0)));
    }

    #[test]
    fn showdown_split() {
        // Pair of tens with the same kickers in different suits.
        let p1 = res("TH TC AS KD 9C 4H 2D");
        let p2 = res("TS TD AH KC 9D 4C 3D");
        assert_eq!(p1.category, HandCategory::Pair);

        let outcome = resolve_showdown(&[p1, p2]).unwrap();
        assert_eq!(outcome, Outcome::Split(vec![0, 1]));
        assert_eq!(outcome.winners(), &[0, 1]);
    }

    #[test]
    fn showdown_kicker() {
        let board = "TH TC AS 7D 2C";
        let p1 = res(&format!("{board} KD 3H"));
        let p2 = res(&format!("{board} QD 4H"));
        let p3 = res(&format!("{board} KC 8H"));

        // Players 0 and 2 tie on the king and player 2 wins on the fifth card.
        assert_eq!(resolve_showdown(&[p1, p2, p3]), Ok(Outcome::Winner(2)));
    }

    #[test]
    fn showdown_partial_tie_split() {
        // The board plays for everyone.
        let board = "KH KC QS JD 9C";
        let p1 = res(&format!("{board} 2D 3H"));
        let p2 = res(&format!("{board} 8D 7H"));
        let p3 = res(&format!("{board} 4D 5S"));
        let p4 = res("5H 5C 7S 6D 2S 3C JD");

        let outcome = resolve_showdown(&[p1, p2, p3]).unwrap();
        assert_eq!(outcome, Outcome::Split(vec![0, 1, 2]));

        // Adds a player with a lower pair.
        let outcome = resolve_showdown(&[p4, p1, p2, p3]).unwrap();
        assert_eq!(outcome, Outcome::Split(vec![1, 2, 3]));
    }

    #[test]
    fn showdown_full_house() {
        // Trips are compared before the pair.
        let p1 = res("QH QC QS 2D 2C 7H 8S");
        let p2 = res("JH JC JS AD AC 7D 8D");
        assert_eq!(resolve_showdown(&[p2, p1]), Ok(Outcome::Winner(1)));

        // Same trips, the pair decides.
        let board = "QH QC QS 7D 2C";
        let p1 = res(&format!("{board} 2D 3H"));
        let p2 = res(&format!("{board} 7H 4H"));
        assert_eq!(resolve_showdown(&[p1, p2]), Ok(Outcome::Winner(1)));
    }

    #[test]
    fn showdown_straights() {
        let board = "2C 3D 4H 5S KD";
        let wheel = res(&format!("{board} AC QH"));
        let six_high = res(&format!("{board} 6C QS"));
        let other_wheel = res(&format!("{board} AD JH"));

        assert_eq!(resolve_showdown(&[wheel, six_high]), Ok(Outcome::Winner(1)));
        assert_eq!(
            resolve_showdown(&[wheel, other_wheel]),
            Ok(Outcome::Split(vec![0, 1]))
        );
    }

    #[test]
    fn showdown_two_pair() {
        let board = "QH QC 9S 5D 2C";
        let p1 = res(&format!("{board} 9D 3H"));
        let p2 = res(&format!("{board} 5C AH"));
        let p3 = res(&format!("{board} 9H 4H"));

        // Queens and nines beat queens and fives, then players 0 and 2 share
        // the board five as kicker.
        assert_eq!(
            resolve_showdown(&[p1, p2, p3]),
            Ok(Outcome::Split(vec![0, 2]))
        );
    }

    #[test]
    fn showdown_matches_pairwise_comparison() {
        let mut rng = rand::rng();

        for _ in 0..2_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let board = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();

            let results = (0..4)
                .map(|_| {
                    let mut hand = board.clone();
                    hand.extend((0..2).filter_map(|_| deck.deal()));
                    classify(&hand).unwrap()
                })
                .collect::<Vec<_>>();

            let outcome = resolve_showdown(&results).unwrap();
            let winners = outcome.winners();
            assert!(!winners.is_empty());

            for (idx, r) in results.iter().enumerate() {
                let best = &results[winners[0]];
                if winners.contains(&idx) {
                    assert_eq!(r.cmp_strength(best), Ordering::Equal);
                } else {
                    assert_eq!(r.cmp_strength(best), Ordering::Less);
                }
            }

            if let Outcome::Split(players) = &outcome {
                assert!(players.len() > 1);
            }
        }
    }
}
