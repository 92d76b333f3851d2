//! Output side of glimpse.
//!
//! - [style]: styled segments and width accounting.
//! - [fit]: the [fit::FitRenderer] that fits a summary into the rest of a row.
//! - [row]: per-entry rows ([row::RowAssembler]).
//! - [render]: the listing printer ([render::print_listing]).

pub mod fit;
pub mod render;
pub mod row;
pub mod style;

pub use fit::{Fit, FitRenderer, Layout};
pub use render::print_listing;
pub use row::RowAssembler;
pub use style::{Segment, StyleTag, StyledLine};
