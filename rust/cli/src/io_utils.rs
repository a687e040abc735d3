//! Line input helpers for interactive commands.

use std::io::BufRead;

/// Reads one line from a buffered reader, blocking until available.
/// Trims surrounding whitespace; `None` means EOF or a read error.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
