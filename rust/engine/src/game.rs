use serde::{Deserialize, Serialize};

use crate::betting::{run_betting_round, BotPolicy};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::TableEvent;
use crate::hand::{evaluate_hand, HandRank};
use crate::io::TableIo;
use crate::player::Player;

/// Betting street. Hands walk the four phases in order with no
/// backward transitions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::PreFlop, Phase::Flop, Phase::Turn, Phase::River];

    pub fn minimum_bet(self) -> u32 {
        match self {
            Phase::PreFlop => 10,
            _ => 20,
        }
    }

    /// Community cards revealed when the phase opens.
    pub fn reveal_count(self) -> usize {
        match self {
            Phase::PreFlop => 0,
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
        }
    }
}

/// How many seats a standard table starts with.
pub const SEAT_COUNT: usize = 5;

/// Result of one full hand.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandOutcome {
    /// Winning seat and its descriptor, or `None` when every seat
    /// folded and the pot was forfeited.
    pub winner: Option<(String, HandRank)>,
    pub pot: u32,
}

/// Multi-hand summary returned by [`Game::run`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RunSummary {
    pub hands_played: u32,
    /// Last seat holding chips. Absent when the cap stopped play early
    /// or when the final hand burned every remaining stack.
    pub winner: Option<String>,
    /// True when `max_hands` stopped play before a winner emerged.
    pub capped: bool,
}

/// One table: the deck, the seat roster, the community cards and the
/// pot. All of it is exclusively owned here; betting rounds borrow the
/// roster for the duration of a single street.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    table: Vec<Card>,
    pot: u32,
}

impl Game {
    pub fn new(players: Vec<Player>, seed: u64) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::TooFewSeats {
                seats: players.len(),
            });
        }
        Ok(Self {
            deck: Deck::new_with_seed(seed),
            players,
            table: Vec::with_capacity(5),
            pot: 0,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn table(&self) -> &[Card] {
        &self.table
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Seats still able to bankroll another hand.
    pub fn solvent_seats(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.chips() > 0 && !p.has_folded())
            .count()
    }

    /// Plays one full hand: shuffle and deal, the four betting streets,
    /// showdown, payout, then roster and deck cleanup.
    ///
    /// Pot accounting is intentionally quirky and load-bearing: each
    /// street reports the sum of the per-hand accumulators of the seats
    /// that acted, but only the river figure is added to the pot. Since
    /// accumulators never reset mid-hand, the river sum equals the full
    /// contribution of the seats still in at the river; chips bet by
    /// seats that folded or went broke earlier simply leave play.
    pub fn play_hand(
        &mut self,
        bots: &mut dyn BotPolicy,
        io: &mut dyn TableIo,
    ) -> Result<HandOutcome, GameError> {
        self.deck.shuffle();
        self.table.clear();
        self.pot = 0;
        for p in &mut self.players {
            p.reset_for_hand();
        }
        for _ in 0..2 {
            for p in &mut self.players {
                let card = self.deck.draw()?;
                p.give_card(card)?;
            }
        }

        for phase in Phase::ALL {
            for _ in 0..phase.reveal_count() {
                self.table.push(self.deck.draw()?);
            }
            io.display(TableEvent::PhaseStarted { phase });
            if phase == Phase::PreFlop {
                self.display_seats(io);
            } else {
                io.display(TableEvent::TableCards {
                    cards: self.table.clone(),
                });
            }
            let round = run_betting_round(
                &mut self.players,
                phase.minimum_bet(),
                &self.table,
                phase,
                bots,
                io,
            );
            io.display(TableEvent::StreetPot {
                phase,
                amount: round.contribution,
            });
            if phase == Phase::River {
                self.pot += round.contribution;
            }
        }

        let outcome = self.showdown(io);
        self.display_seats(io);
        self.cleanup(io);
        Ok(outcome)
    }

    /// Repeats hands until at most one solvent seat remains, or until
    /// `max_hands` if a cap is given.
    pub fn run(
        &mut self,
        bots: &mut dyn BotPolicy,
        io: &mut dyn TableIo,
        max_hands: Option<u32>,
    ) -> Result<RunSummary, GameError> {
        let mut hands_played = 0u32;
        while self.solvent_seats() >= 2 {
            if max_hands.is_some_and(|cap| hands_played >= cap) {
                return Ok(RunSummary {
                    hands_played,
                    winner: None,
                    capped: true,
                });
            }
            self.play_hand(bots, io)?;
            hands_played += 1;
        }
        let winner = self
            .players
            .iter()
            .find(|p| p.chips() > 0)
            .map(|p| (p.name().to_string(), p.chips()));
        if let Some((name, chips)) = &winner {
            io.display(TableEvent::GameWinner {
                name: name.clone(),
                chips: *chips,
            });
        }
        Ok(RunSummary {
            hands_played,
            winner: winner.map(|(name, _)| name),
            capped: false,
        })
    }

    /// Picks the strict maximum descriptor among non-folded seats and
    /// pays it the whole pot. Equal descriptors never displace the
    /// incumbent, so the first seat in order wins exact ties. With no
    /// non-folded seat the pot is forfeited.
    fn showdown(&mut self, io: &mut dyn TableIo) -> HandOutcome {
        let mut best: Option<(usize, HandRank)> = None;
        for (i, p) in self.players.iter().enumerate() {
            if p.has_folded() {
                continue;
            }
            let mut cards: Vec<Card> = p.hole().to_vec();
            cards.extend_from_slice(&self.table);
            let rank = evaluate_hand(&cards);
            if best.map_or(true, |(_, incumbent)| rank > incumbent) {
                best = Some((i, rank));
            }
        }
        match best {
            Some((i, rank)) => {
                let pot = self.pot;
                self.players[i].add_chips(pot);
                let name = self.players[i].name().to_string();
                io.display(TableEvent::HandWinner {
                    name: name.clone(),
                    rank,
                    pot,
                });
                HandOutcome {
                    winner: Some((name, rank)),
                    pot,
                }
            }
            None => {
                let pot = self.pot;
                io.display(TableEvent::HandForfeited { pot });
                HandOutcome { winner: None, pot }
            }
        }
    }

    /// Recycles table and hole cards into the deck and removes busted
    /// seats permanently. Surrendering cards also clears fold flags so
    /// the loop-boundary roster check counts chip-solvent seats.
    fn cleanup(&mut self, io: &mut dyn TableIo) {
        let mut discards: Vec<Card> = self.table.drain(..).collect();
        for p in &mut self.players {
            discards.extend(p.surrender_cards());
        }
        self.deck.recycle(discards);
        for p in &self.players {
            if p.chips() == 0 {
                io.display(TableEvent::SeatBusted {
                    name: p.name().to_string(),
                });
            }
        }
        self.players.retain(|p| p.chips() > 0);
    }

    fn display_seats(&self, io: &mut dyn TableIo) {
        for p in &self.players {
            io.display(TableEvent::SeatStatus {
                name: p.name().to_string(),
                chips: p.chips(),
                bet: p.current_bet(),
                folded: p.has_folded(),
            });
        }
    }
}
