//! Subcommand handlers. Each takes explicit output (and input) streams
//! so integration tests can run whole commands through buffers.

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
