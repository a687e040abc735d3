//! The `deal` command: one seeded hand dealt face up with the
//! evaluator's verdict per seat. Inspection and debugging aid.

use std::io::Write;

use serde::Serialize;

use quinte_engine::cards::Card;
use quinte_engine::deck::Deck;
use quinte_engine::game::SEAT_COUNT;
use quinte_engine::hand::{evaluate_hand, HandRank};

use crate::error::CliError;
use crate::formatters::{format_cards, format_hand_rank};

#[derive(Debug, Serialize)]
struct DealReport {
    seed: u64,
    table: Vec<Card>,
    seats: Vec<SeatReport>,
}

#[derive(Debug, Serialize)]
struct SeatReport {
    name: String,
    hole: Vec<Card>,
    rank: HandRank,
}

pub fn handle_deal_command(
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut holes: Vec<Vec<Card>> = Vec::with_capacity(SEAT_COUNT);
    for _ in 0..SEAT_COUNT {
        holes.push(vec![deck.draw()?, deck.draw()?]);
    }
    let mut table = Vec::with_capacity(5);
    for _ in 0..5 {
        table.push(deck.draw()?);
    }

    let seats: Vec<SeatReport> = holes
        .into_iter()
        .enumerate()
        .map(|(i, hole)| {
            let mut cards = hole.clone();
            cards.extend_from_slice(&table);
            SeatReport {
                name: format!("Player {}", i + 1),
                rank: evaluate_hand(&cards),
                hole,
            }
        })
        .collect();

    let report = DealReport { seed, table, seats };
    if json {
        let line = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "Seed: {}", report.seed)?;
        writeln!(out, "Table: {}", format_cards(&report.table))?;
        for seat in &report.seats {
            writeln!(
                out,
                "{}: {} -> {}",
                seat.name,
                format_cards(&seat.hole),
                format_hand_rank(&seat.rank)
            )?;
        }
    }
    Ok(())
}
