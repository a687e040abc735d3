//! Argument types for the `quinte` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "quinte",
    version,
    about = "Five-seat Texas Hold'em table simulator"
)]
pub struct QuinteCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a table until one seat holds all surviving chips
    Play {
        /// Deck shuffle seed (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Starting chips per seat
        #[arg(long)]
        chips: Option<u32>,
        /// Seed for bot raise sizing (default: random)
        #[arg(long)]
        bot_seed: Option<u64>,
        /// Stop after this many hands even without an overall winner
        #[arg(long)]
        max_hands: Option<u32>,
    },
    /// Deal one hand face up and show each seat's evaluator verdict
    Deal {
        /// Deck shuffle seed (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the deal as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
