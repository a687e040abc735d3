use std::collections::VecDeque;

use quinte_engine::betting::{run_betting_round, BotPolicy};
use quinte_engine::cards::Card;
use quinte_engine::events::TableEvent;
use quinte_engine::game::Phase;
use quinte_engine::io::TableIo;
use quinte_engine::player::{Action, Player};

/// Feeds a fixed action sequence to human prompts and records events.
struct ScriptedIo {
    actions: VecDeque<Action>,
    events: Vec<TableEvent>,
    prompts: usize,
}

impl ScriptedIo {
    fn new(actions: Vec<Action>) -> Self {
        Self {
            actions: actions.into(),
            events: Vec::new(),
            prompts: 0,
        }
    }
}

impl TableIo for ScriptedIo {
    fn prompt_action(&mut self, _seat: &Player, _highest_bet: u32, _table: &[Card]) -> Action {
        self.prompts += 1;
        self.actions.pop_front().expect("script ran dry")
    }
    fn prompt_name(&mut self, _seat_index: usize) -> String {
        "bot".to_string()
    }
    fn display(&mut self, event: TableEvent) {
        self.events.push(event);
    }
}

/// Bot policy that panics if consulted; used to prove humans never
/// route through it (and vice versa with `fixed`).
struct NoBots;

impl BotPolicy for NoBots {
    fn decide(&mut self, seat: &Player, _table: &[Card], _phase: Phase) -> Action {
        panic!("bot policy consulted for {}", seat.name());
    }
}

struct FixedBot(Action);

impl BotPolicy for FixedBot {
    fn decide(&mut self, _seat: &Player, _table: &[Card], _phase: Phase) -> Action {
        self.0
    }
}

fn humans(n: usize, chips: u32) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("Player {}", i + 1), chips, false))
        .collect()
}

#[test]
fn calls_pay_the_minimum_when_nobody_raises() {
    let mut players = humans(3, 1000);
    let mut io = ScriptedIo::new(vec![Action::Call, Action::Call, Action::Call]);
    let outcome = run_betting_round(&mut players, 10, &[], Phase::PreFlop, &mut NoBots, &mut io);
    assert_eq!(outcome.highest_bet, 10);
    // Running sum of per-seat accumulators: 10, then 10+10, then +10
    assert_eq!(outcome.contribution, 30);
    for p in &players {
        assert_eq!(p.chips(), 990);
        assert_eq!(p.current_bet(), 10);
    }
}

#[test]
fn a_raise_lifts_the_highest_bet_for_later_seats() {
    let mut players = humans(3, 1000);
    let mut io = ScriptedIo::new(vec![Action::Call, Action::Raise(20), Action::Call]);
    let outcome = run_betting_round(&mut players, 10, &[], Phase::PreFlop, &mut NoBots, &mut io);
    assert_eq!(outcome.highest_bet, 30);
    assert_eq!(players[0].current_bet(), 10);
    // The raiser pays the lifted total, not just the increment
    assert_eq!(players[1].current_bet(), 30);
    assert_eq!(players[2].current_bet(), 30);
    assert_eq!(outcome.contribution, 10 + 30 + 30);
}

#[test]
fn folded_and_broke_seats_are_skipped() {
    let mut players = humans(4, 1000);
    players[1].fold();
    let mut broke = Player::new("Broke", 0, false);
    std::mem::swap(&mut players[2], &mut broke);
    let mut io = ScriptedIo::new(vec![Action::Call, Action::Call]);
    let outcome = run_betting_round(&mut players, 20, &[], Phase::Flop, &mut NoBots, &mut io);
    assert_eq!(io.prompts, 2);
    assert_eq!(outcome.contribution, 40);
    assert_eq!(players[1].current_bet(), 0);
    assert_eq!(players[2].current_bet(), 0);
}

#[test]
fn calling_short_stacked_goes_all_in() {
    let mut players = humans(2, 1000);
    let mut short = Player::new("Short", 15, false);
    std::mem::swap(&mut players[1], &mut short);
    let mut io = ScriptedIo::new(vec![Action::Raise(40), Action::Call]);
    let outcome = run_betting_round(&mut players, 10, &[], Phase::PreFlop, &mut NoBots, &mut io);
    assert_eq!(outcome.highest_bet, 50);
    let short = &players[1];
    assert_eq!(short.chips(), 0);
    assert_eq!(short.current_bet(), 15);
    // A partial all-in never lowers the standing highest bet
    assert_eq!(outcome.contribution, 50 + 15);
}

#[test]
fn folding_marks_the_seat_and_announces_it() {
    let mut players = humans(2, 1000);
    let mut io = ScriptedIo::new(vec![Action::Fold, Action::Call]);
    run_betting_round(&mut players, 10, &[], Phase::PreFlop, &mut NoBots, &mut io);
    assert!(players[0].has_folded());
    assert!(io.events.iter().any(|e| matches!(
        e,
        TableEvent::SeatFolded { name } if name == "Player 1"
    )));
    // The folder's zero accumulator still joins the sum
    assert_eq!(players[0].current_bet(), 0);
}

#[test]
fn accumulator_carries_across_streets() {
    // Call on two consecutive streets: the seat pays the full highest
    // bet both times because the accumulator never resets mid-hand
    let mut players = humans(1, 1000);
    let mut io = ScriptedIo::new(vec![Action::Call, Action::Call]);
    run_betting_round(&mut players, 10, &[], Phase::PreFlop, &mut NoBots, &mut io);
    let second = run_betting_round(&mut players, 20, &[], Phase::Flop, &mut NoBots, &mut io);
    assert_eq!(players[0].current_bet(), 30);
    assert_eq!(players[0].chips(), 970);
    // The street report reads the whole per-hand accumulator
    assert_eq!(second.contribution, 30);
}

#[test]
fn an_absurd_raise_saturates_instead_of_overflowing() {
    let mut players = humans(2, 1000);
    let mut io = ScriptedIo::new(vec![Action::Raise(u32::MAX), Action::Call]);
    let outcome = run_betting_round(&mut players, 10, &[], Phase::PreFlop, &mut NoBots, &mut io);
    // The standing bet pins at u32::MAX rather than wrapping back down
    assert_eq!(outcome.highest_bet, u32::MAX);
    // Both seats are clamped to their stacks: all-in
    assert_eq!(players[0].chips(), 0);
    assert_eq!(players[0].current_bet(), 1000);
    assert_eq!(players[1].chips(), 0);
    assert_eq!(players[1].current_bet(), 1000);
}

#[test]
fn bot_seats_consult_the_policy_not_the_prompt() {
    let mut players = vec![
        Player::new("Bot 1", 1000, true),
        Player::new("Bot 2", 1000, true),
    ];
    let mut io = ScriptedIo::new(vec![]);
    let outcome = run_betting_round(
        &mut players,
        10,
        &[],
        Phase::PreFlop,
        &mut FixedBot(Action::Raise(10)),
        &mut io,
    );
    assert_eq!(io.prompts, 0);
    // First bot lifts 10 -> 20, second lifts 20 -> 30
    assert_eq!(outcome.highest_bet, 30);
    assert_eq!(players[0].current_bet(), 20);
    assert_eq!(players[1].current_bet(), 30);
}
