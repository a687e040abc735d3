use crate::cards::Card;
use crate::events::TableEvent;
use crate::player::{Action, Player};

/// Boundary to whatever front end hosts the table (console, test
/// buffers, anything line-based). The engine is synchronous: every
/// prompt blocks the whole simulation until the seat answers, which is
/// fine for turn-based play.
pub trait TableIo {
    /// Blocking action prompt for a human seat. Adapters translate
    /// free text into [`Action`]; anything unrecognized must come back
    /// as `Action::Fold`.
    fn prompt_action(&mut self, seat: &Player, highest_bet: u32, table: &[Card]) -> Action;

    /// Seat naming during setup. The literal answer "bot"
    /// (case-insensitive) marks the seat as machine-controlled.
    fn prompt_name(&mut self, seat_index: usize) -> String;

    /// Fire-and-forget display hook. Must not block on game state and
    /// must not mutate it; failures are the adapter's to swallow.
    fn display(&mut self, event: TableEvent);
}
