//! The `cfg` command: print the resolved configuration and where each
//! value came from.

use std::io::Write;

use crate::config::{self, ValueSource};
use crate::error::CliError;

fn source_label(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Default => "default",
        ValueSource::File => "file",
        ValueSource::Env => "env",
    }
}

fn optional(v: Option<u64>) -> String {
    v.map_or_else(|| "(unset)".to_string(), |n| n.to_string())
}

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            crate::ui::write_error(err, &e.to_string())?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  starting_chips = {} ({})",
        resolved.config.starting_chips,
        source_label(resolved.sources.starting_chips)
    )?;
    writeln!(
        out,
        "  seed = {} ({})",
        optional(resolved.config.seed),
        source_label(resolved.sources.seed)
    )?;
    writeln!(
        out,
        "  bot_seed = {} ({})",
        optional(resolved.config.bot_seed),
        source_label(resolved.sources.bot_seed)
    )?;
    Ok(())
}
