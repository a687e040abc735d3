//! # quinte-engine: Five-seat Hold'em Table Core
//!
//! The state machine behind a multi-round Texas Hold'em table: deck
//! lifecycle, per-street betting, 5-to-7-card hand ranking, showdown
//! with first-seen tie-break, and the multi-hand elimination loop with
//! chip and pot accounting. Everything is single-threaded and owned by
//! the game loop; the only outside contact is the [`io::TableIo`]
//! boundary for prompts and display.
//!
//! ## Modules
//!
//! - [`cards`] - Suit, Rank, Card and deck construction
//! - [`deck`] - Seeded ChaCha20 shuffling, draw and recycle
//! - [`hand`] - Hand ranking with the simplified flush/straight tests
//! - [`player`] - Seat state, actions and the per-hand bet accumulator
//! - [`betting`] - One-pass betting streets and the [`betting::BotPolicy`] seam
//! - [`game`] - Phases, single hands and the elimination loop
//! - [`events`] - Display notifications pushed over the I/O boundary
//! - [`io`] - The abstract front-end boundary
//! - [`errors`] - Error types
//!
//! ## Quick start
//!
//! ```rust
//! use quinte_engine::cards::{Card, Rank, Suit};
//! use quinte_engine::hand::{evaluate_hand, Category};
//!
//! let cards = [
//!     Card { suit: Suit::Spades, rank: Rank::Nine },
//!     Card { suit: Suit::Hearts, rank: Rank::Nine },
//!     Card { suit: Suit::Diamonds, rank: Rank::Nine },
//!     Card { suit: Suit::Clubs, rank: Rank::Four },
//!     Card { suit: Suit::Hearts, rank: Rank::Four },
//! ];
//! let rank = evaluate_hand(&cards);
//! assert_eq!(rank.category, Category::FullHouse);
//! assert_eq!(rank.tiebreak, 9);
//! ```
//!
//! ## Deterministic shuffles
//!
//! ```rust
//! use quinte_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.draw().unwrap(), b.draw().unwrap());
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod io;
pub mod player;
