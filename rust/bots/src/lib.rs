//! # quinte-bots: Machine-controlled seats
//!
//! Implementations of the engine's [`BotPolicy`] seam. The table
//! policy everyone plays against is [`heuristic::HeuristicBot`]; the
//! [`scripted`] policies exist for driving deterministic games in
//! tests and demos.
//!
//! ```rust
//! use quinte_bots::create_bot;
//!
//! let bot = create_bot("heuristic", 42);
//! ```

pub use quinte_engine::betting::BotPolicy;

pub mod heuristic;
pub mod scripted;

pub use heuristic::HeuristicBot;
pub use scripted::{CallBot, FoldBot};

/// Factory for policies by name: `heuristic`, `call`, or `fold`.
/// The seed only matters to the heuristic policy's raise sizing.
///
/// # Panics
///
/// Panics on an unknown kind.
pub fn create_bot(kind: &str, seed: u64) -> Box<dyn BotPolicy> {
    match kind {
        "heuristic" => Box::new(HeuristicBot::new(seed)),
        "call" => Box::new(CallBot),
        "fold" => Box::new(FoldBot),
        _ => panic!("Unknown bot kind: {}", kind),
    }
}
