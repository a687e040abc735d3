use crate::cards::Card;
use crate::events::TableEvent;
use crate::game::Phase;
use crate::io::TableIo;
use crate::player::{Action, Player};

/// Decision source for bot seats. One policy instance serves every bot
/// at the table; the seat handed in carries the hole cards and stack
/// the policy may read.
pub trait BotPolicy {
    fn decide(&mut self, seat: &Player, table: &[Card], phase: Phase) -> Action;
}

/// What one street's betting pass produced.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RoundOutcome {
    /// Sum of each processed seat's per-hand accumulator after it
    /// acted. Accumulators are never reset between streets, so this
    /// figure overlaps with earlier streets; the game loop knows which
    /// one to keep.
    pub contribution: u32,
    /// The highest bet standing when the pass ended.
    pub highest_bet: u32,
}

/// Drives one wagering street: every non-folded seat with chips acts
/// exactly once, in seat order. There is no re-opening of action after
/// a raise; later seats simply face the lifted highest bet.
pub fn run_betting_round(
    players: &mut [Player],
    minimum_bet: u32,
    table: &[Card],
    phase: Phase,
    bots: &mut dyn BotPolicy,
    io: &mut dyn TableIo,
) -> RoundOutcome {
    let mut highest_bet = minimum_bet;
    let mut contribution = 0u32;

    for player in players.iter_mut() {
        if player.has_folded() || player.chips() == 0 {
            continue;
        }
        let action = if player.is_bot() {
            bots.decide(player, table, phase)
        } else {
            io.prompt_action(player, highest_bet, table)
        };
        match action {
            Action::Fold => {
                player.fold();
                io.display(TableEvent::SeatFolded {
                    name: player.name().to_string(),
                });
            }
            Action::Call => {
                // Pays the full highest bet again; the accumulator is
                // per-hand, not per-street. Clamped to the stack.
                player.bet(highest_bet);
            }
            Action::Raise(amount) => {
                // Saturate on absurd amounts; the stack clamp in `bet`
                // caps what is actually paid either way
                let total = highest_bet.saturating_add(amount);
                player.bet(total);
                highest_bet = total;
            }
        }
        contribution += player.current_bet();
    }

    RoundOutcome {
        contribution,
        highest_bet,
    }
}
