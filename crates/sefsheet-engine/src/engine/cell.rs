//! Cell storage for the sheet grid.
//!
//! - [`Cell`] - the raw text / stored formula / display value triple
//! - [`Grid`] - sparse row-major storage for cells
//! - [`value_of`] - numeric reading of a cell for use inside formulas

use std::collections::BTreeMap;

use super::cell_ref::CellRef;

/// A single cell: the text the user typed, the stored formula (if any), and
/// the last computed display string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    /// Text exactly as typed.
    pub raw: String,
    /// Verbatim formula text, including the leading '='.
    /// `Some` iff `raw` starts with '='.
    pub formula: Option<String>,
    /// Last computed value or error token; equals `raw` for literal cells.
    pub display: String,
}

impl Cell {
    /// Build a cell from user input.
    /// - Starts with '=' -> formula cell; `display` is left for the next
    ///   recalculation pass to fill.
    /// - Anything else (including the empty string) -> literal; displayed
    ///   as-is.
    pub fn from_input(input: &str) -> Cell {
        if input.starts_with('=') {
            Cell {
                raw: input.to_string(),
                formula: Some(input.to_string()),
                display: String::new(),
            }
        } else {
            Cell {
                raw: input.to_string(),
                formula: None,
                display: input.to_string(),
            }
        }
    }

    pub fn is_formula(&self) -> bool {
        self.formula.is_some()
    }
}

/// Sparse grid storage, keyed by (row, col).
///
/// `BTreeMap` iteration follows `CellRef`'s row-major ordering, which gives
/// recalculation its deterministic sweep order. An absent key is an empty
/// cell with numeric value 0.
pub type Grid = BTreeMap<CellRef, Cell>;

/// Numeric value of a cell as seen by formulas referencing it.
///
/// Reads the longest leading numeric prefix of the display string, so a
/// literal like "5 apples" contributes 5. Absent cells and anything with no
/// numeric prefix (text, error tokens, empty strings) count as 0, so one bad
/// reference can't blank a whole dependent chain. Formula cells contribute
/// their last *computed* value, never their formula text.
pub fn value_of(grid: &Grid, cell_ref: &CellRef) -> f64 {
    grid.get(cell_ref)
        .and_then(|cell| leading_number(cell.display.trim_start()))
        .unwrap_or(0.0)
}

/// Longest leading float prefix of the text (sign, digits, decimal point,
/// exponent), or None if it doesn't start with a number.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    while end < bytes.len()
        && (bytes[end].is_ascii_digit() || matches!(bytes[end], b'.' | b'+' | b'-' | b'e' | b'E'))
    {
        end += 1;
    }

    // The scan is over-eager ("5+3", "1e"); back off until a prefix parses.
    while end > 0 {
        if let Ok(value) = text[..end].parse::<f64>() {
            return Some(value);
        }
        end -= 1;
    }
    None
}
