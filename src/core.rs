//! Core runtime logic for glimpse.
//!
//! This module contains the non-UI “engine” pieces used by the listing:
//! - [fm]: directory enumeration and the entry model (see [browse_dir], [Entry], [Link]).
//! - [kind]: classification of a name and its mode into a [FileKind].
//! - [budget]: the per-row column budget ([WidthBudget]).
//! - [summary]: directory and file content summaries ([ContentCandidate]).
//! - [formatter]: sorting, filtering, permission and size fields.
//! - [vcs]: git status, branch and latest commit ([VcsStatus]).
//! - [terminal]: terminal width query.
//! - [error]: the error taxonomy ([GlimpseError]).
//!
//! Most callers will import [browse_dir], [Entry], and [summarize] from this module.

pub mod budget;
pub mod error;
pub mod fm;
pub mod formatter;
pub mod kind;
pub mod summary;
pub mod terminal;
pub mod vcs;

pub use budget::WidthBudget;
pub use error::GlimpseError;
pub use fm::{Entry, Link, browse_dir};
pub use formatter::{Formatter, format_permissions, format_size_parts};
pub use kind::{CoarseType, FileKind, classify};
pub use summary::{ContentCandidate, CountUnit, summarize, summarize_dir, summarize_file};
pub use terminal::terminal_width;
pub use vcs::{LastChange, VcsStatus};
