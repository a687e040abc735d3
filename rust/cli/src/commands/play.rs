//! The `play` command: a five-seat table of humans and bots, played
//! hand after hand until a single seat holds all surviving chips.

use std::io::{BufRead, Write};

use quinte_bots::HeuristicBot;
use quinte_engine::game::{Game, RunSummary, SEAT_COUNT};
use quinte_engine::io::TableIo;
use quinte_engine::player::Player;

use crate::config;
use crate::error::CliError;
use crate::prompt::StdioTable;

/// Runs an interactive table. Flags override config file and
/// environment; missing seeds are drawn at random. A `max_hands` cap
/// stops play early without declaring an overall winner.
pub fn handle_play_command(
    seed: Option<u64>,
    chips: Option<u32>,
    bot_seed: Option<u64>,
    max_hands: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let starting_chips = chips.unwrap_or(cfg.starting_chips);
    if starting_chips == 0 {
        crate::ui::write_error(err, "chips must be >= 1")?;
        return Err(CliError::InvalidInput("chips must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let bot_seed = bot_seed.or(cfg.bot_seed).unwrap_or_else(rand::random);

    writeln!(
        out,
        "play: seats={} chips={} seed={} bot_seed={}",
        SEAT_COUNT, starting_chips, seed, bot_seed
    )?;

    let summary = run_table(seed, bot_seed, starting_chips, max_hands, stdin, out)?;

    writeln!(out, "Hands played: {}", summary.hands_played)?;
    if summary.capped {
        writeln!(out, "Stopped at the hand cap with chips still split.")?;
    }
    Ok(())
}

fn run_table(
    seed: u64,
    bot_seed: u64,
    starting_chips: u32,
    max_hands: Option<u32>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<RunSummary, CliError> {
    let mut io = StdioTable::new(stdin, out);
    let mut players = Vec::with_capacity(SEAT_COUNT);
    for i in 0..SEAT_COUNT {
        let name = io.prompt_name(i);
        players.push(seat_from_name(&name, i, starting_chips));
    }
    let mut game = Game::new(players, seed)?;
    let mut bots = HeuristicBot::new(bot_seed);
    Ok(game.run(&mut bots, &mut io, max_hands)?)
}

/// The literal name "bot" (any case) makes the seat machine-controlled;
/// an empty reply falls back to a numbered human seat.
fn seat_from_name(name: &str, seat_index: usize, chips: u32) -> Player {
    if name.eq_ignore_ascii_case("bot") {
        Player::new(format!("Bot {}", seat_index + 1), chips, true)
    } else if name.is_empty() {
        Player::new(format!("Player {}", seat_index + 1), chips, false)
    } else {
        Player::new(name, chips, false)
    }
}
