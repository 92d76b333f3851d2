//! Terminal queries for glimpse.
//!
//! glimpse only ever needs the column count. Everything else about the terminal
//! (colour support, piping) is decided once in `main`.

use crossterm::terminal;

/// Current terminal width in columns, or `fallback` when it cannot be queried
/// (output piped, no controlling terminal, zero-sized pty).
pub fn terminal_width(fallback: usize) -> usize {
    match terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        Ok(_) => fallback,
        Err(e) => {
            log::debug!("terminal size unavailable ({}), using {} columns", e, fallback);
            fallback
        }
    }
}
