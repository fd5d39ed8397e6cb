//! Grid recalculation.
//!
//! There is no dependency graph: recalculation sweeps every formula cell
//! against the current grid, in row-major order, and repeats until a full
//! pass changes nothing. A formula that reads a cell updated later in the
//! same pass heals on the next pass; cyclic references stop converging and
//! run into the pass cap instead.

use super::cell::Grid;
use super::cell_ref::CellRef;
use super::eval::evaluate;

/// Upper bound on convergence passes. Reaching it means the sheet probably
/// contains a reference cycle; whatever values are present are kept as-is,
/// with no error attached to any cell.
pub const MAX_RECALC_PASSES: usize = 10;

/// Re-evaluate every formula cell until values stabilize or the pass cap is
/// reached. Runs to completion synchronously; call once per content edit.
pub fn recalculate(grid: &mut Grid) {
    for _ in 0..MAX_RECALC_PASSES {
        let mut changed = false;

        let cell_refs: Vec<CellRef> = grid.keys().copied().collect();
        for cell_ref in cell_refs {
            let Some(formula) = grid.get(&cell_ref).and_then(|cell| cell.formula.clone()) else {
                continue;
            };

            // Evaluate against the grid as it stands mid-pass, so values
            // written earlier in this sweep are already visible.
            let result = evaluate(&formula, grid);
            if let Some(cell) = grid.get_mut(&cell_ref)
                && cell.display != result
            {
                cell.display = result;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }
}
