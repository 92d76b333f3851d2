//! Configuration for glimpse.
//!
//! - [load]: the [Config] struct, file lookup and `--init` generation.
//! - [general]: which entries are listed and how symlinks are followed.
//! - [display]: which fields each row shows.
//! - [theme]: colours per entry kind and the tag-to-escape-code mapping.

pub mod display;
pub mod general;
pub mod load;
pub mod theme;

pub use display::Display;
pub(crate) use general::General;
pub use general::InternalGeneral;
pub use load::Config;
pub use theme::Theme;
