//! Sorting, filtering, and fixed-width field formatting for glimpse.
//!
//! The [Formatter] struct holds the rules for sorting and filtering entries,
//! based on user preferences from the glimpse.toml configuration.
//!
//! Also formats the permission triad and the size label/unit pair shown in front of each name.

use crate::config::Display;
use crate::core::Entry;

use humansize::{DECIMAL, format_size};

use std::collections::HashSet;
use std::sync::Arc;

/// Width of the right-aligned size number.
pub const SIZE_LABEL_WIDTH: usize = 4;
/// Width of the left-aligned size unit.
pub const SIZE_UNIT_WIDTH: usize = 3;

/// Formatter struct to handle sorting and filtering of entries
/// based on user preferences.
pub struct Formatter {
    dirs_first: bool,
    show_dotfiles: bool,
    hidden_names: Arc<HashSet<String>>,
}

impl Formatter {
    pub fn new(dirs_first: bool, show_dotfiles: bool, hidden_names: Arc<HashSet<String>>) -> Self {
        Self {
            dirs_first,
            show_dotfiles,
            hidden_names,
        }
    }

    /// Sorts the given entries in place according to the formatter's settings.
    pub fn sort_entries(&self, entries: &mut [Entry]) {
        entries.sort_by(|a, b| {
            if self.dirs_first {
                match (a.points_to_dir(), b.points_to_dir()) {
                    (true, false) => return std::cmp::Ordering::Less,
                    (false, true) => return std::cmp::Ordering::Greater,
                    _ => {}
                }
            }
            a.name().cmp(b.name())
        });
    }

    /// Filters the given entries in place according to the formatter's settings, then sorts them.
    pub fn filter_entries(&self, entries: &mut Vec<Entry>) {
        entries.retain(|e| {
            if self.hidden_names.contains(e.name()) {
                return false;
            }
            self.show_dotfiles || !e.is_hidden()
        });
        self.sort_entries(entries);
    }
}

/// Formats the enabled digits of the octal permission triad, e.g. `755` or `75`.
/// # Returns
/// An empty string when every permission column is disabled.
pub fn format_permissions(mode: u32, display: &Display) -> String {
    let digits = [
        (display.owner_permissions(), (mode >> 6) & 0o7),
        (display.group_permissions(), (mode >> 3) & 0o7),
        (display.other_permissions(), mode & 0o7),
    ];

    digits
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, digit)| char::from(b'0' + *digit as u8))
        .collect()
}

/// Formats the size into a right-aligned number and a left-aligned unit,
/// e.g. `(" 1.2", "kB ")` or `(" 512", "B  ")`.
pub fn format_size_parts(size: u64) -> (String, String) {
    let mut formatted = format_size(size, DECIMAL.decimal_places(1));
    // 123.4 kB does not fit the label, drop the fraction
    if formatted.split(' ').next().map_or(0, str::len) > SIZE_LABEL_WIDTH {
        formatted = format_size(size, DECIMAL.decimal_places(0));
    }
    let (number, unit) = formatted
        .split_once(' ')
        .unwrap_or((formatted.as_str(), ""));

    (
        format!("{:>width$}", number, width = SIZE_LABEL_WIDTH),
        format!("{:<width$}", unit, width = SIZE_UNIT_WIDTH),
    )
}
