//! sefsheet-core - UI-agnostic sheet document model.

pub mod error;
pub mod sheet;

pub use error::{Result, SheetError};
pub use sheet::{CellStyle, FontStyle, FontWeight, Selection, SheetStore, StylePatch};

pub use sefsheet_engine::engine::{Cell, CellRef, Grid};
