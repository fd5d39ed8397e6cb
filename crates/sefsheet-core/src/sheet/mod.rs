//! Sheet document model.

mod ops;
mod state;
mod style;

pub use state::{Selection, SheetStore};
pub use style::{CellStyle, FontStyle, FontWeight, StylePatch};
