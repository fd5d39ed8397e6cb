//! Range parsing and aggregation.

use super::cell::{Grid, value_of};
use super::cell_ref::CellRef;

/// Parse a cell range like "A1:B5" into its two corner references.
/// Exactly two addresses separated by a single ':'; anything else is None.
pub fn parse_range(range: &str) -> Option<(CellRef, CellRef)> {
    let parts: Vec<&str> = range.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let start = CellRef::from_str(parts[0])?;
    let end = CellRef::from_str(parts[1])?;
    Some((start, end))
}

/// Sum every cell in the inclusive rectangle named by `range`.
///
/// The corners may be given in any orientation. A range that fails to parse
/// contributes 0 rather than failing the formula; error policy lives with
/// the evaluator, not here. Cells are accumulated in row-major order so
/// floating-point results stay deterministic.
pub fn sum_range(range: &str, grid: &Grid) -> f64 {
    let Some((start, end)) = parse_range(range) else {
        return 0.0;
    };

    let min_row = start.row.min(end.row);
    let max_row = start.row.max(end.row);
    let min_col = start.col.min(end.col);
    let max_col = start.col.max(end.col);

    let mut sum = 0.0;
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            sum += value_of(grid, &CellRef::new(row, col));
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Cell;

    fn grid_with(values: &[(usize, usize, &str)]) -> Grid {
        let mut grid = Grid::new();
        for &(row, col, text) in values {
            grid.insert(CellRef::new(row, col), Cell::from_input(text));
        }
        grid
    }

    #[test]
    fn test_parse_range() {
        let (start, end) = parse_range("A1:B5").unwrap();
        assert_eq!(start, CellRef::new(0, 0));
        assert_eq!(end, CellRef::new(4, 1));

        assert!(parse_range("A1").is_none());
        assert!(parse_range("A1:B2:C3").is_none());
        assert!(parse_range("A1:").is_none());
        assert!(parse_range("invalid").is_none());
    }

    #[test]
    fn test_sum_range_single_cell() {
        let grid = grid_with(&[(0, 0, "5")]);
        assert_eq!(sum_range("A1:A1", &grid), 5.0);
    }

    #[test]
    fn test_sum_range_any_corner_orientation() {
        let grid = grid_with(&[(0, 0, "1"), (0, 1, "2"), (1, 0, "3"), (1, 1, "4")]);
        assert_eq!(sum_range("A1:B2", &grid), 10.0);
        assert_eq!(sum_range("B2:A1", &grid), 10.0);
        assert_eq!(sum_range("A2:B1", &grid), 10.0);
    }

    #[test]
    fn test_sum_range_skips_non_numeric_cells() {
        let grid = grid_with(&[(0, 0, "1"), (1, 0, "two"), (2, 0, "3")]);
        assert_eq!(sum_range("A1:A3", &grid), 4.0);
    }

    #[test]
    fn test_sum_range_malformed_is_zero() {
        let grid = grid_with(&[(0, 0, "5")]);
        assert_eq!(sum_range("A1", &grid), 0.0);
        assert_eq!(sum_range("A0:A1", &grid), 0.0);
        assert_eq!(sum_range("", &grid), 0.0);
    }
}
