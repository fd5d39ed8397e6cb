//! Error types for SefSheet core.

use thiserror::Error;

use sefsheet_engine::engine::CellRef;

/// Errors that can occur while operating on a sheet.
///
/// Formula-level failures are not represented here: they surface as the
/// `#ERROR!` / `#VALUE!` display strings of the affected cells.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("cell {cell} is outside the {rows}x{cols} sheet")]
    CellOutOfBounds {
        cell: CellRef,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} is outside the sheet ({rows} rows)")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("column {col} is outside the sheet ({cols} columns)")]
    ColumnOutOfBounds { col: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, SheetError>;
