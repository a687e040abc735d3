//! Card, table and event formatters for terminal display.
//!
//! Uses Unicode suit symbols (♥ ♦ ♣ ♠) where the terminal is likely to
//! render them, with single-letter ASCII fallback elsewhere.

use quinte_engine::cards::{Card, Rank, Suit};
use quinte_engine::events::TableEvent;
use quinte_engine::game::Phase;
use quinte_engine::hand::{Category, HandRank};

/// Modern Windows terminals advertise themselves via environment;
/// Unix-likes are assumed Unicode-capable.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

pub fn format_phase(phase: Phase) -> &'static str {
    match phase {
        Phase::PreFlop => "Pre-Flop",
        Phase::Flop => "Flop",
        Phase::Turn => "Turn",
        Phase::River => "River",
    }
}

pub fn format_category(category: Category) -> &'static str {
    match category {
        Category::HighCard => "high card",
        Category::OnePair => "one pair",
        Category::TwoPair => "two pair",
        Category::ThreeOfAKind => "three of a kind",
        Category::Straight => "straight",
        Category::Flush => "flush",
        Category::FullHouse => "full house",
        Category::FourOfAKind => "four of a kind",
    }
}

pub fn format_hand_rank(rank: &HandRank) -> String {
    format!(
        "{} ({} high)",
        format_category(rank.category),
        format_rank(Rank::from_u8(rank.tiebreak))
    )
}

/// Renders one table event as a display line. Phase banners mirror the
/// classic `### Flop ###` look.
pub fn format_event(event: &TableEvent) -> String {
    match event {
        TableEvent::PhaseStarted { phase } => format!("\n### {} ###", format_phase(*phase)),
        TableEvent::SeatStatus {
            name,
            chips,
            bet,
            folded,
        } => {
            if *folded {
                format!("{} - folded", name)
            } else {
                format!("{} - chips: {}, bet: {}", name, chips, bet)
            }
        }
        TableEvent::TableCards { cards } => format!("Table: {}", format_cards(cards)),
        TableEvent::StreetPot { amount, .. } => format!("Street pot: {}", amount),
        TableEvent::SeatFolded { name } => format!("{} folds", name),
        TableEvent::HandWinner { name, rank, pot } => {
            format!("{} wins the pot of {} with {}", name, pot, format_hand_rank(rank))
        }
        TableEvent::HandForfeited { pot } => {
            format!("Everyone folded; the pot of {} is forfeited", pot)
        }
        TableEvent::SeatBusted { name } => format!("{} is out of chips and leaves the table", name),
        TableEvent::GameWinner { name, chips } => {
            format!("\n{} wins the game with {} chips", name, chips)
        }
    }
}
