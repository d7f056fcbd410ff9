// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seat starting hands.
use anyhow::{Error, Result, bail};
use std::{fmt, str::FromStr};

use pokersim_cards::Card;

/// The two hole cards of a seat, each card is either given or dealt at
/// random for every game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartingHand {
    cards: [Option<Card>; 2],
}

impl StartingHand {
    /// Creates a starting hand.
    pub fn new(c1: Option<Card>, c2: Option<Card>) -> Self {
        Self { cards: [c1, c2] }
    }

    /// The hole cards, `None` for a card dealt at random.
    pub fn cards(&self) -> [Option<Card>; 2] {
        self.cards
    }

    /// The known hole cards.
    pub fn known(&self) -> impl Iterator<Item = Card> {
        self.cards.into_iter().flatten()
    }

    /// The number of hole cards dealt at random.
    pub fn unknown(&self) -> usize {
        self.cards.iter().filter(|c| c.is_none()).count()
    }
}

impl FromStr for StartingHand {
    type Err = Error;

    /// Parses `AH,KD`, `AH ?` or a single `?` for two random cards.
    fn from_str(s: &str) -> Result<Self> {
        let parts = s
            .split([',', ' '])
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>();

        let card = |p: &str| -> Result<Option<Card>> {
            if p == "?" {
                Ok(None)
            } else {
                Ok(Some(p.parse::<Card>()?))
            }
        };

        match parts.as_slice() {
            ["?"] => Ok(Self::default()),
            [c1, c2] => Ok(Self::new(card(*c1)?, card(*c2)?)),
            _ => bail!("invalid starting hand '{s}', expected two cards like AH,KD"),
        }
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            match card {
                Some(card) => write!(f, "{card}")?,
                None => write!(f, "?")?,
            }
        }

        Ok(())
    }
}
