use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Hand category, weakest to strongest. There is no straight-flush
/// tier: a hand whose cards would form one still classifies as a flush
/// because the flush test fires first in the precedence chain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
}

/// Totally ordered hand descriptor. The category decides first; the
/// tiebreak is the rank of the deciding group (the repeated rank for
/// quads/trips/pairs, the highest considered rank otherwise). Derived
/// ordering compares the fields lexicographically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    pub tiebreak: u8,
}

/// Evaluates the union of a seat's hole cards and the revealed table
/// cards (2 to 7 cards in total). Depends only on the multiset of
/// ranks and suits, never on input order.
pub fn evaluate_hand(cards: &[Card]) -> HandRank {
    let (rank_counts, suit_counts) = tally(cards);
    let high = highest_rank(&rank_counts);

    if let Some(quad) = repeated_rank(&rank_counts, 4) {
        return HandRank {
            category: Category::FourOfAKind,
            tiebreak: quad,
        };
    }
    if let Some(trip) = repeated_rank(&rank_counts, 3) {
        if paired_ranks(&rank_counts).iter().any(|&r| r != trip) {
            return HandRank {
                category: Category::FullHouse,
                tiebreak: trip,
            };
        }
    }
    if has_flush(&suit_counts) {
        return HandRank {
            category: Category::Flush,
            tiebreak: high,
        };
    }
    if has_straight(&rank_counts) {
        return HandRank {
            category: Category::Straight,
            tiebreak: high,
        };
    }
    if let Some(trip) = repeated_rank(&rank_counts, 3) {
        return HandRank {
            category: Category::ThreeOfAKind,
            tiebreak: trip,
        };
    }
    let pairs = paired_ranks(&rank_counts);
    if pairs.len() >= 2 {
        return HandRank {
            category: Category::TwoPair,
            tiebreak: pairs[0],
        };
    }
    if let Some(&pair) = pairs.first() {
        return HandRank {
            category: Category::OnePair,
            tiebreak: pair,
        };
    }
    HandRank {
        category: Category::HighCard,
        tiebreak: high,
    }
}

fn tally(cards: &[Card]) -> ([u8; 15], [u8; 4]) {
    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut suit_counts = [0u8; 4];
    for &c in cards {
        rank_counts[c.rank.value() as usize] += 1;
        suit_counts[c.suit.index()] += 1;
    }
    (rank_counts, suit_counts)
}

/// A flush is any suit seen five or more times. The test is a pure
/// count; it never checks which five cards carry the suit.
fn has_flush(suit_counts: &[u8; 4]) -> bool {
    suit_counts.iter().any(|&c| c >= 5)
}

/// Straight heuristic over the distinct ranks present: at least five
/// distinct ranks whose top five, sorted descending, span exactly four.
/// This deliberately misses wheel straights (A-2-3-4-5 spans twelve)
/// and fires only on the highest run.
fn has_straight(rank_counts: &[u8; 15]) -> bool {
    let mut distinct: Vec<u8> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    distinct.truncate(5);
    distinct.len() == 5 && distinct[0] - distinct[4] == 4
}

/// Highest rank with the given repeat count or more.
fn repeated_rank(rank_counts: &[u8; 15], times: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&r| rank_counts[r as usize] >= times)
}

/// Ranks appearing at least twice, highest first.
fn paired_ranks(rank_counts: &[u8; 15]) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] >= 2)
        .collect()
}

fn highest_rank(rank_counts: &[u8; 15]) -> u8 {
    (2..=14u8)
        .rev()
        .find(|&r| rank_counts[r as usize] > 0)
        .unwrap_or(0)
}
