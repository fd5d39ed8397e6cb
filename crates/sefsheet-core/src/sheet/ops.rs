use sefsheet_engine::engine::{Cell, CellRef, recalculate};

use super::state::{Selection, SheetStore};
use super::style::{CellStyle, StylePatch};
use crate::error::{Result, SheetError};

impl SheetStore {
    fn check_bounds(&self, cell: &CellRef) -> Result<()> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return Err(SheetError::CellOutOfBounds {
                cell: *cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Apply a raw text edit to one cell and synchronously recalculate the
    /// whole grid.
    ///
    /// Input starting with '=' is stored as a formula; anything else is a
    /// literal. An empty string clears the cell's content but keeps its
    /// entry (for value reads an empty cell is the same as an absent one).
    pub fn apply_edit(&mut self, cell_ref: CellRef, input: &str) -> Result<()> {
        self.check_bounds(&cell_ref)?;

        self.grid.insert(cell_ref, Cell::from_input(input));
        recalculate(&mut self.grid);
        Ok(())
    }

    /// Display string for a cell, empty if the cell is absent.
    pub fn display_at(&self, cell_ref: &CellRef) -> &str {
        self.grid
            .get(cell_ref)
            .map(|cell| cell.display.as_str())
            .unwrap_or("")
    }

    /// The cell at a position, if present.
    pub fn cell_at(&self, cell_ref: &CellRef) -> Option<&Cell> {
        self.grid.get(cell_ref)
    }

    /// Style for a cell; absent entries render with the default style.
    pub fn style_at(&self, cell_ref: &CellRef) -> CellStyle {
        self.styles.get(cell_ref).cloned().unwrap_or_default()
    }

    /// Make one cell active and collapse the selection to it, or clear both
    /// with `None`. Leaves cell contents untouched; never recalculates.
    pub fn set_active_cell(&mut self, cell_ref: Option<CellRef>) -> Result<()> {
        let Some(cell_ref) = cell_ref else {
            self.active_cell = None;
            self.selection = None;
            return Ok(());
        };
        self.check_bounds(&cell_ref)?;

        self.active_cell = Some(cell_ref);
        self.selection = Some(Selection::single(cell_ref));
        self.editing = false;
        self.sheet_selected = false;
        self.selected_rows.clear();
        self.selected_cols.clear();
        Ok(())
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// Replace the rectangular selection; drops any row/column/sheet
    /// selection.
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
        self.sheet_selected = false;
        self.selected_rows.clear();
        self.selected_cols.clear();
    }

    pub fn select_all(&mut self) {
        self.sheet_selected = true;
        self.active_cell = Some(CellRef::new(0, 0));
        self.selection = None;
        self.selected_rows.clear();
        self.selected_cols.clear();
    }

    /// Toggle a whole-row selection on or off.
    pub fn toggle_row_selection(&mut self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(SheetError::RowOutOfBounds {
                row,
                rows: self.rows,
            });
        }
        if !self.selected_rows.remove(&row) {
            self.selected_rows.insert(row);
        }
        self.selected_cols.clear();
        self.sheet_selected = false;
        self.selection = None;
        self.active_cell = None;
        Ok(())
    }

    /// Toggle a whole-column selection on or off.
    pub fn toggle_col_selection(&mut self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(SheetError::ColumnOutOfBounds {
                col,
                cols: self.cols,
            });
        }
        if !self.selected_cols.remove(&col) {
            self.selected_cols.insert(col);
        }
        self.selected_rows.clear();
        self.sheet_selected = false;
        self.selection = None;
        self.active_cell = None;
        Ok(())
    }

    /// Merge a style patch over every cell covered by the current selection
    /// target: the whole sheet, selected rows, selected columns, or the
    /// selection rectangle, in that priority order.
    pub fn set_selection_style(&mut self, patch: &StylePatch) {
        for cell_ref in self.selection_targets() {
            self.styles.entry(cell_ref).or_default().apply(patch);
        }
    }

    /// Reset every cell in the current selection target to the default
    /// style.
    pub fn clear_selection_formatting(&mut self) {
        for cell_ref in self.selection_targets() {
            self.styles.remove(&cell_ref);
        }
    }

    fn selection_targets(&self) -> Vec<CellRef> {
        let mut targets = Vec::new();
        if self.rows == 0 || self.cols == 0 {
            return targets;
        }

        if self.sheet_selected {
            for row in 0..self.rows {
                for col in 0..self.cols {
                    targets.push(CellRef::new(row, col));
                }
            }
        } else if !self.selected_rows.is_empty() {
            for &row in &self.selected_rows {
                for col in 0..self.cols {
                    targets.push(CellRef::new(row, col));
                }
            }
        } else if !self.selected_cols.is_empty() {
            for &col in &self.selected_cols {
                for row in 0..self.rows {
                    targets.push(CellRef::new(row, col));
                }
            }
        } else if let Some(selection) = self.selection {
            let (min_row, max_row, min_col, max_col) = selection.bounds();
            for row in min_row..=max_row.min(self.rows - 1) {
                for col in min_col..=max_col.min(self.cols - 1) {
                    targets.push(CellRef::new(row, col));
                }
            }
        }
        targets
    }
}
