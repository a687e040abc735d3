use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The card stock shared across hands. Built once with all 52 cards;
/// cards leave through [`Deck::draw`] and come back through
/// [`Deck::recycle`] before the next shuffle. At any instant the deck,
/// the hole cards, the table cards and the not-yet-recycled discards
/// partition the 52-card universe.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        // Initial order is fixed until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Randomly permutes the remaining cards in place. Does not restore
    /// drawn cards; callers recycle discards first.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Returns previously dealt cards to the stock. No reshuffle happens
    /// here; the next shuffle mixes them back in.
    pub fn recycle<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
