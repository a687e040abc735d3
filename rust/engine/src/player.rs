use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// A wagering decision. Free-text front ends parse into this closed
/// set before anything reaches the betting engine; unrecognized input
/// becomes `Fold` at the boundary.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Call,
    /// Raise the highest bet by this increment.
    Raise(u32),
}

/// Default chip stack for a fresh seat.
pub const STARTING_CHIPS: u32 = 1000;

/// Per-seat mutable state for one table.
///
/// `current_bet` is a per-hand contribution accumulator: it resets once
/// before pre-flop and keeps growing across streets. Calling therefore
/// pays the full highest bet again on every street rather than topping
/// up, and the accumulator is what the pot summation reads.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    chips: u32,
    hole: Vec<Card>,
    current_bet: u32,
    folded: bool,
    bot: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32, bot: bool) -> Self {
        Self {
            name: name.into(),
            chips,
            hole: Vec::with_capacity(2),
            current_bet: 0,
            folded: false,
            bot,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn has_folded(&self) -> bool {
        self.folded
    }
    pub fn is_bot(&self) -> bool {
        self.bot
    }

    pub fn give_card(&mut self, card: Card) -> Result<(), GameError> {
        if self.hole.len() >= 2 {
            return Err(GameError::HoleCardsFull {
                name: self.name.clone(),
            });
        }
        self.hole.push(card);
        Ok(())
    }

    /// Hands back the hole cards for recycling and clears the fold flag
    /// so the between-hands roster check counts chip-solvent seats.
    pub fn surrender_cards(&mut self) -> Vec<Card> {
        self.folded = false;
        std::mem::take(&mut self.hole)
    }

    /// Pays `amount` into the hand, clamped to the remaining stack
    /// (all-in). Returns the chips actually paid.
    pub fn bet(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.current_bet += paid;
        paid
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Hand-start reset: fold flag and contribution accumulator. Runs
    /// once per hand, never between streets.
    pub fn reset_for_hand(&mut self) {
        self.current_bet = 0;
        self.folded = false;
    }
}
