//! Helpers for glimpse.
//!
//! This module defines the bounds for the symlink resolution depth and provides:
//! - Color parsing from strings or hex codes
//! - Home directory lookup
//! - Stack-allocated lowercasing for short lookups
//! - Clamping of configured values to safe ranges
//! - Printable names

use crossterm::style::Color;
use std::borrow::Cow;
use std::path::PathBuf;

/// The smallest symlink depth. Every link can show at least its direct target.
pub const MIN_SYMLINK_DEPTH: usize = 1;
/// The default symlink depth. Can be overwritten in the glimpse.toml.
pub const DEFAULT_SYMLINK_DEPTH: usize = 1;
/// The deepest chain glimpse follows before calling a link unresolved.
pub const MAX_SYMLINK_DEPTH: usize = 8;

/// Parses a string (color name or hex) into a crossterm::style::Color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::DarkYellow,
        "red" => Color::DarkRed,
        "blue" => Color::DarkBlue,
        "green" => Color::DarkGreen,
        "magenta" => Color::DarkMagenta,
        "cyan" => Color::DarkCyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Grey,
        "darkgray" | "darkgrey" => Color::DarkGrey,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                match color.len() {
                    6 => {
                        if let Ok(rgb) = u32::from_str_radix(color, 16) {
                            return rgb_color(rgb);
                        }
                    }
                    3 => {
                        let expanded = color
                            .chars()
                            .map(|c| format!("{}{}", c, c))
                            .collect::<String>();
                        if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                            return rgb_color(rgb);
                        }
                    }
                    _ => {}
                }
            }
            // fallback
            Color::Reset
        }
    }
}

fn rgb_color(rgb: u32) -> Color {
    Color::Rgb {
        r: ((rgb >> 16) & 0xFF) as u8,
        g: ((rgb >> 8) & 0xFF) as u8,
        b: (rgb & 0xFF) as u8,
    }
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Runs `f` on the ASCII-lowercased `s`.
/// Short names are lowered in a stack buffer, longer ones fall back to a heap string.
pub fn with_lowered_stack<R>(s: &str, f: impl FnOnce(&str) -> R) -> R {
    const STACK_LEN: usize = 32;

    let bytes = s.as_bytes();
    if bytes.len() <= STACK_LEN {
        let mut buf = [0u8; STACK_LEN];
        for (dst, src) in buf.iter_mut().zip(bytes) {
            *dst = src.to_ascii_lowercase();
        }
        // ASCII lowercasing keeps UTF-8 boundaries intact
        if let Ok(lowered) = std::str::from_utf8(&buf[..bytes.len()]) {
            return f(lowered);
        }
    }
    f(&s.to_ascii_lowercase())
}

/// Replaces control characters with `?`, the way `ls` prints names.
/// Keeps a name on one line and one column per replaced character.
pub fn sanitize_name(name: &str) -> Cow<'_, str> {
    if !name.chars().any(char::is_control) {
        return Cow::Borrowed(name);
    }
    Cow::Owned(
        name.chars()
            .map(|c| if c.is_control() { '?' } else { c })
            .collect(),
    )
}

/// Safely clamp the symlink depth.
///
/// Values outside [MIN_SYMLINK_DEPTH]..=[MAX_SYMLINK_DEPTH] are clamped with a warning.
pub fn clamp_symlink_depth(value: usize) -> usize {
    let clamped = value.clamp(MIN_SYMLINK_DEPTH, MAX_SYMLINK_DEPTH);
    if clamped != value {
        eprintln!(
            "[Warning] symlink_depth={} out of range ({}..={}), clamped to {}",
            value, MIN_SYMLINK_DEPTH, MAX_SYMLINK_DEPTH, clamped
        );
    }
    clamped
}
