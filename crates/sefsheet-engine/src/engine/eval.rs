//! Formula evaluation front end.
//!
//! Takes the text of a formula cell, substitutes `SUM(range)` calls and cell
//! references with their current numeric values, and evaluates the remaining
//! arithmetic. Failures become the sentinel display strings [`ERROR_TOKEN`]
//! and [`VALUE_TOKEN`]; they are ordinary cell values, never Rust errors.

use regex::Regex;
use std::sync::OnceLock;

use super::cell::{Grid, value_of};
use super::cell_ref::CellRef;
use super::expr::{ExprError, eval_expr};
use super::range::sum_range;

/// Formula reduced to an empty or structurally invalid expression.
pub const ERROR_TOKEN: &str = "#ERROR!";
/// Expression parsed but evaluated to a non-finite result.
pub const VALUE_TOKEN: &str = "#VALUE!";

/// Evaluate a formula against the current grid, returning the display string.
///
/// Text without a leading '=' is returned unchanged. Unresolvable references
/// and ranges substitute as 0 rather than aborting the whole formula.
pub fn evaluate(formula: &str, grid: &Grid) -> String {
    let Some(body) = formula.strip_prefix('=') else {
        return formula.to_string();
    };

    // SUM(range) first, so range text is consumed before bare references.
    let substituted = sum_fn_re().replace_all(body, |caps: &regex::Captures| {
        sum_range(&caps[1], grid).to_string()
    });

    let substituted = cell_ref_re().replace_all(&substituted, |caps: &regex::Captures| {
        match CellRef::from_str(&caps[0]) {
            Some(cell_ref) => value_of(grid, &cell_ref).to_string(),
            None => "0".to_string(),
        }
    });

    // Strip anything that is not plain arithmetic; the expression handed to
    // the parser must contain no letters at all.
    let sanitized: String = substituted
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.'))
        .collect();

    if sanitized.is_empty() {
        return ERROR_TOKEN.to_string();
    }

    match eval_expr(&sanitized) {
        Ok(value) => value.to_string(),
        Err(ExprError::Syntax) => ERROR_TOKEN.to_string(),
        Err(ExprError::NonFinite) => VALUE_TOKEN.to_string(),
    }
}

fn sum_fn_re() -> &'static Regex {
    static SUM_RE: OnceLock<Regex> = OnceLock::new();
    SUM_RE.get_or_init(|| {
        // Args run to the next ')'; nested parentheses are not supported.
        Regex::new(r"(?i)SUM\(([^)]+)\)").expect("SUM substitution regex must compile")
    })
}

fn cell_ref_re() -> &'static Regex {
    static CELL_RE: OnceLock<Regex> = OnceLock::new();
    CELL_RE
        .get_or_init(|| Regex::new(r"[A-Za-z]+[0-9]+").expect("cell reference regex must compile"))
}
