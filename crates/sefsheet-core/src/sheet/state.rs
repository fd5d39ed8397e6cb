use std::collections::{BTreeMap, BTreeSet};

use sefsheet_engine::engine::{CellRef, Grid};

use super::style::CellStyle;

/// Default sheet dimensions.
pub(crate) const DEFAULT_ROWS: usize = 100;
pub(crate) const DEFAULT_COLS: usize = 26;

/// A rectangular selection between two corner cells, in any orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub start: CellRef,
    pub end: CellRef,
}

impl Selection {
    pub fn single(cell: CellRef) -> Selection {
        Selection {
            start: cell,
            end: cell,
        }
    }

    /// Normalized bounds as (min_row, max_row, min_col, max_col).
    pub fn bounds(&self) -> (usize, usize, usize, usize) {
        (
            self.start.row.min(self.end.row),
            self.start.row.max(self.end.row),
            self.start.col.min(self.end.col),
            self.start.col.max(self.end.col),
        )
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        let (min_row, max_row, min_col, max_col) = self.bounds();
        (min_row..=max_row).contains(&cell.row) && (min_col..=max_col).contains(&cell.col)
    }
}

/// UI-agnostic sheet state: the owned grid plus the selection and styling
/// data the rendering layer works from.
///
/// There is exactly one logical writer: every content edit goes through
/// `apply_edit`, which runs its recalculation to completion before
/// returning, so no caller ever observes a partially-applied edit.
pub struct SheetStore {
    /// The sheet grid. Exclusively owned; mutated in place per edit.
    pub(crate) grid: Grid,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    /// Styles kept beside the grid, not inside it, so the engine only ever
    /// sees cell values.
    pub(crate) styles: BTreeMap<CellRef, CellStyle>,
    pub(crate) active_cell: Option<CellRef>,
    pub(crate) selection: Option<Selection>,
    pub(crate) selected_rows: BTreeSet<usize>,
    pub(crate) selected_cols: BTreeSet<usize>,
    pub(crate) sheet_selected: bool,
    pub(crate) editing: bool,
}

impl SheetStore {
    /// Create an empty sheet with the given bounds.
    ///
    /// Side-effect free: no recalculation runs until the first edit.
    pub fn new(rows: usize, cols: usize) -> Self {
        let origin = CellRef::new(0, 0);
        SheetStore {
            grid: Grid::new(),
            rows,
            cols,
            styles: BTreeMap::new(),
            active_cell: Some(origin),
            selection: Some(Selection::single(origin)),
            selected_rows: BTreeSet::new(),
            selected_cols: BTreeSet::new(),
            sheet_selected: false,
            editing: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The grid snapshot, read-only for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active_cell(&self) -> Option<CellRef> {
        self.active_cell
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn selected_rows(&self) -> &BTreeSet<usize> {
        &self.selected_rows
    }

    pub fn selected_cols(&self) -> &BTreeSet<usize> {
        &self.selected_cols
    }

    pub fn is_sheet_selected(&self) -> bool {
        self.sheet_selected
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }
}

impl Default for SheetStore {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
