use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Orchestration bug: five seats plus a full board consume at most
    /// 15 of the 52 cards, so a correct hand never exhausts the deck.
    #[error("deck is out of cards")]
    EmptyDeck,
    #[error("seat {name} already holds two hole cards")]
    HoleCardsFull { name: String },
    #[error("a table needs at least two seats, got {seats}")]
    TooFewSeats { seats: usize },
}
