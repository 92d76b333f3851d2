//! Miscellaneous utility functions for glimpse.
//!
//! This module holds the [cli] submodule for argument handling and the [helpers]
//! submodule with small utilities such as:
//! - Color parsing
//! - Home directory lookup
//! - Lowercase lookups without allocating
//! - Clamping configured values
//! - Printable names

pub mod cli;
pub mod helpers;

pub use helpers::{
    DEFAULT_SYMLINK_DEPTH, MAX_SYMLINK_DEPTH, MIN_SYMLINK_DEPTH, clamp_symlink_depth, get_home,
    parse_color, sanitize_name, with_lowered_stack,
};
