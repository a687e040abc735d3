use quinte_engine::betting::BotPolicy;
use quinte_engine::cards::Card;
use quinte_engine::events::TableEvent;
use quinte_engine::game::{Game, Phase};
use quinte_engine::io::TableIo;
use quinte_engine::player::{Action, Player};

/// Records events; panics if any seat reaches a human prompt.
struct SilentIo {
    events: Vec<TableEvent>,
}

impl SilentIo {
    fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl TableIo for SilentIo {
    fn prompt_action(&mut self, seat: &Player, _highest_bet: u32, _table: &[Card]) -> Action {
        panic!("human prompt reached for {}", seat.name());
    }
    fn prompt_name(&mut self, _seat_index: usize) -> String {
        "bot".to_string()
    }
    fn display(&mut self, event: TableEvent) {
        self.events.push(event);
    }
}

/// Dispatches a fixed action per seat name, calling for everyone else.
struct ByName {
    folds: Vec<&'static str>,
}

impl BotPolicy for ByName {
    fn decide(&mut self, seat: &Player, _table: &[Card], _phase: Phase) -> Action {
        if self.folds.iter().any(|n| *n == seat.name()) {
            Action::Fold
        } else {
            Action::Call
        }
    }
}

struct AlwaysFold;

impl BotPolicy for AlwaysFold {
    fn decide(&mut self, _seat: &Player, _table: &[Card], _phase: Phase) -> Action {
        Action::Fold
    }
}

fn bots(names: &[&str], chips: u32) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n, chips, true)).collect()
}

#[test]
fn one_fold_four_callers_settles_the_expected_stacks() {
    let mut game = Game::new(bots(&["Folder", "B", "C", "D", "E"], 1000), 99).unwrap();
    let mut policy = ByName { folds: vec!["Folder"] };
    let mut io = SilentIo::new();
    let outcome = game.play_hand(&mut policy, &mut io).unwrap();

    // Each caller pays the full standing bet again on every street:
    // 10 + 20 + 20 + 20 accumulates to 70. The river street reports
    // 4 * 70 = 280 and that figure alone funds the pot.
    assert_eq!(outcome.pot, 280);
    let winner = outcome.winner.expect("someone shows down").0;
    assert_ne!(winner, "Folder");

    let chips: Vec<(String, u32)> = game
        .players()
        .iter()
        .map(|p| (p.name().to_string(), p.chips()))
        .collect();
    for (name, amount) in &chips {
        if name == "Folder" {
            assert_eq!(*amount, 1000);
        } else if *name == winner {
            assert_eq!(*amount, 1000 - 70 + 280);
        } else {
            assert_eq!(*amount, 930);
        }
    }
    let total: u32 = chips.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 5000);
}

#[test]
fn everyone_folding_forfeits_an_empty_pot() {
    let mut game = Game::new(bots(&["A", "B", "C"], 500), 4).unwrap();
    let mut io = SilentIo::new();
    let outcome = game.play_hand(&mut AlwaysFold, &mut io).unwrap();
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.pot, 0);
    assert!(io
        .events
        .iter()
        .any(|e| matches!(e, TableEvent::HandForfeited { pot: 0 })));
    // Folding costs nothing, so every stack is intact
    for p in game.players() {
        assert_eq!(p.chips(), 500);
    }
}

#[test]
fn the_deck_and_table_are_whole_after_a_hand() {
    let mut game = Game::new(bots(&["A", "B", "C", "D", "E"], 1000), 7).unwrap();
    let mut policy = ByName { folds: vec![] };
    let mut io = SilentIo::new();
    game.play_hand(&mut policy, &mut io).unwrap();
    assert_eq!(game.deck_remaining(), 52);
    assert!(game.table().is_empty());
    for p in game.players() {
        assert!(p.hole().is_empty());
        assert!(!p.has_folded());
    }
}

#[test]
fn successive_hands_reset_the_per_hand_accumulator() {
    let mut game = Game::new(bots(&["A", "B", "C", "D", "E"], 1000), 11).unwrap();
    let mut policy = ByName { folds: vec![] };
    let mut io = SilentIo::new();
    let first = game.play_hand(&mut policy, &mut io).unwrap();
    let second = game.play_hand(&mut policy, &mut io).unwrap();
    // Five callers, 70 each, on both hands
    assert_eq!(first.pot, 350);
    assert_eq!(second.pot, 350);
}

#[test]
fn too_few_seats_is_rejected() {
    let result = Game::new(bots(&["Lonely"], 1000), 1);
    assert!(result.is_err());
}

#[test]
fn play_stops_at_the_hand_cap() {
    let mut game = Game::new(bots(&["A", "B", "C", "D", "E"], 1000), 5).unwrap();
    let mut policy = ByName { folds: vec![] };
    let mut io = SilentIo::new();
    let summary = game.run(&mut policy, &mut io, Some(3)).unwrap();
    assert_eq!(summary.hands_played, 3);
    assert_eq!(summary.winner, None);
    assert!(summary.capped);
}
