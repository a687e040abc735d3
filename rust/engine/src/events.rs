use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::hand::HandRank;

/// Display-only notifications pushed through [`crate::io::TableIo`].
/// Consumers render them however they like; the engine never waits on
/// or reads anything back from a display call.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TableEvent {
    PhaseStarted {
        phase: Phase,
    },
    SeatStatus {
        name: String,
        chips: u32,
        bet: u32,
        folded: bool,
    },
    TableCards {
        cards: Vec<Card>,
    },
    /// Chips this street's pass summed out of the seat accumulators.
    /// Only the river figure ever lands in the actual pot.
    StreetPot {
        phase: Phase,
        amount: u32,
    },
    SeatFolded {
        name: String,
    },
    HandWinner {
        name: String,
        rank: HandRank,
        pot: u32,
    },
    /// Every seat folded; the pot is forfeited, not carried over.
    HandForfeited {
        pot: u32,
    },
    SeatBusted {
        name: String,
    },
    GameWinner {
        name: String,
        chips: u32,
    },
}
