//! The table's default bot: a fixed hole-card heuristic.
//!
//! The policy reads nothing but the two hole cards. Table cards and
//! the phase are part of the seam signature and deliberately ignored;
//! the decision is identical on every street.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quinte_engine::betting::BotPolicy;
use quinte_engine::cards::Card;
use quinte_engine::game::Phase;
use quinte_engine::player::{Action, Player};

/// Coarse hole-card strength buckets the heuristic acts on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HoleStrength {
    /// Pocket pair: open with a raise.
    PairOrBetter,
    /// At least one card above Ten (Jack or better): call along.
    StrongCard,
    /// Anything else: not worth a single chip.
    WeakHand,
}

/// Classifies two hole cards into a strength bucket.
pub fn classify(hole: &[Card]) -> HoleStrength {
    match hole {
        [a, b] if a.rank == b.rank => HoleStrength::PairOrBetter,
        [a, b] if a.rank.value() > 10 || b.rank.value() > 10 => HoleStrength::StrongCard,
        _ => HoleStrength::WeakHand,
    }
}

/// Raise increments a pocket pair opens with.
const RAISE_STEPS: [u32; 3] = [10, 20, 30];

#[derive(Debug, Clone)]
pub struct HeuristicBot {
    rng: StdRng,
}

impl HeuristicBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BotPolicy for HeuristicBot {
    fn decide(&mut self, seat: &Player, _table: &[Card], _phase: Phase) -> Action {
        match classify(seat.hole()) {
            HoleStrength::PairOrBetter => {
                let amount = RAISE_STEPS[self.rng.random_range(0..RAISE_STEPS.len())];
                Action::Raise(amount.min(seat.chips()))
            }
            HoleStrength::StrongCard => Action::Call,
            HoleStrength::WeakHand => Action::Fold,
        }
    }
}
