//! Degenerate policies for deterministic games in tests and demos.

use quinte_engine::betting::BotPolicy;
use quinte_engine::cards::Card;
use quinte_engine::game::Phase;
use quinte_engine::player::{Action, Player};

/// Folds every street.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldBot;

impl BotPolicy for FoldBot {
    fn decide(&mut self, _seat: &Player, _table: &[Card], _phase: Phase) -> Action {
        Action::Fold
    }
}

/// Calls every street, all the way to showdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallBot;

impl BotPolicy for CallBot {
    fn decide(&mut self, _seat: &Player, _table: &[Card], _phase: Phase) -> Action {
        Action::Call
    }
}
