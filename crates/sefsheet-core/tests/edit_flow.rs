//! Integration tests for the edit → recalculate flow a UI drives.

use sefsheet_core::{CellRef, SheetStore};

fn cell(name: &str) -> CellRef {
    CellRef::from_str(name).unwrap()
}

#[test]
fn test_dependent_chain_updates_after_each_edit() {
    let mut sheet = SheetStore::default();
    sheet.apply_edit(cell("A1"), "1").unwrap();
    sheet.apply_edit(cell("A2"), "2").unwrap();
    sheet.apply_edit(cell("A3"), "3").unwrap();
    sheet.apply_edit(cell("B1"), "=SUM(A1:A3)").unwrap();
    sheet.apply_edit(cell("C1"), "=B1*10").unwrap();

    assert_eq!(sheet.display_at(&cell("B1")), "6");
    assert_eq!(sheet.display_at(&cell("C1")), "60");

    sheet.apply_edit(cell("A2"), "20").unwrap();
    assert_eq!(sheet.display_at(&cell("B1")), "24");
    assert_eq!(sheet.display_at(&cell("C1")), "240");
}

#[test]
fn test_independent_edit_order_converges_to_same_state() {
    let mut forward = SheetStore::default();
    forward.apply_edit(cell("A1"), "5").unwrap();
    forward.apply_edit(cell("B1"), "=A1+1").unwrap();

    let mut reverse = SheetStore::default();
    reverse.apply_edit(cell("B1"), "=A1+1").unwrap();
    reverse.apply_edit(cell("A1"), "5").unwrap();

    assert_eq!(forward.display_at(&cell("B1")), "6");
    assert_eq!(reverse.display_at(&cell("B1")), "6");
    assert_eq!(forward.grid(), reverse.grid());
}

#[test]
fn test_error_tokens_render_as_plain_strings() {
    let mut sheet = SheetStore::default();
    sheet.apply_edit(cell("A1"), "=1/0").unwrap();
    sheet.apply_edit(cell("A2"), "=((1+)").unwrap();

    assert_eq!(sheet.display_at(&cell("A1")), "#VALUE!");
    assert_eq!(sheet.display_at(&cell("A2")), "#ERROR!");

    // A formula over an errored cell sees 0, not a propagated error.
    sheet.apply_edit(cell("A3"), "=A1+A2+7").unwrap();
    assert_eq!(sheet.display_at(&cell("A3")), "7");
}

#[test]
fn test_cyclic_sheet_stays_usable() {
    let mut sheet = SheetStore::default();
    sheet.apply_edit(cell("A1"), "=B1+1").unwrap();
    sheet.apply_edit(cell("B1"), "=A1+1").unwrap();

    // The pass cap kept this bounded; the sheet still accepts edits.
    sheet.apply_edit(cell("C1"), "=2+2").unwrap();
    assert_eq!(sheet.display_at(&cell("C1")), "4");
}

#[test]
fn test_formula_cell_exposes_raw_text_for_editing() {
    let mut sheet = SheetStore::default();
    sheet.apply_edit(cell("A1"), "=1+1").unwrap();

    let stored = sheet.cell_at(&cell("A1")).unwrap();
    assert_eq!(stored.raw, "=1+1");
    assert_eq!(stored.display, "2");
}
