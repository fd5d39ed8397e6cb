//! Formula engine API.
//!
//! This module provides the core computation engine for the sheet:
//!
//! - [`Cell`], [`Grid`] - Data structures for cell storage
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`value_of`] - Numeric reading of a single cell
//! - [`parse_range`], [`sum_range`] - Range normalization and aggregation
//! - [`evaluate`] - Formula evaluation against a grid
//! - [`recalculate`] - Fixpoint recalculation sweep

mod cell;
mod cell_ref;
mod eval;
mod expr;
mod range;
mod recalc;

pub use cell::{Cell, Grid, value_of};
pub use cell_ref::CellRef;
pub use eval::{ERROR_TOKEN, VALUE_TOKEN, evaluate};
pub use expr::{ExprError, eval_expr};
pub use range::{parse_range, sum_range};
pub use recalc::{MAX_RECALC_PASSES, recalculate};
