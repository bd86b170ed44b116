//! Field extraction against narrow, wide, ragged and headed grids.

use vitals_core::descriptor::{Addressing, ColumnAddress, FieldDescriptor, FieldSpec, join_template};
use vitals_core::error::CoreError;
use vitals_core::extract::{extract, extract_spec};
use vitals_core::grid::Grid;

fn positional_grid() -> Grid {
    Grid::from_rows(vec![
        vec!["Coaching sheet", "", "", ""],
        vec!["1", "M1", "120", "80"],
        vec!["2", "M2"],
    ])
}

#[test]
fn extracts_cell_by_index() {
    let grid = positional_grid();
    let view = grid.view(Addressing::Positional);
    let row = view.row(1).unwrap();

    assert_eq!(extract(&row, &FieldDescriptor::indexed(2)).unwrap(), "120");
}

#[test]
fn index_past_grid_width_uses_default() {
    let grid = positional_grid();
    let view = grid.view(Addressing::Positional);
    let row = view.row(1).unwrap();

    let protein = FieldDescriptor::indexed(54).or_default("0");
    assert_eq!(extract(&row, &protein).unwrap(), "0");
}

#[test]
fn index_past_grid_width_without_default_is_missing_column() {
    let grid = positional_grid();
    let view = grid.view(Addressing::Positional);
    let row = view.row(1).unwrap();

    let err = extract(&row, &FieldDescriptor::indexed(59)).unwrap_err();
    assert!(matches!(
        err,
        CoreError::MissingColumn { column: ColumnAddress::Index(59) }
    ));
}

#[test]
fn short_row_without_default_is_missing_column() {
    let grid = positional_grid();
    let view = grid.view(Addressing::Positional);
    let row = view.row(2).unwrap();

    let err = extract(&row, &FieldDescriptor::indexed(3)).unwrap_err();
    assert!(matches!(
        err,
        CoreError::MissingColumn { column: ColumnAddress::Index(3) }
    ));
    assert_eq!(
        extract(&row, &FieldDescriptor::indexed(3).or_default("N/A")).unwrap(),
        "N/A"
    );
}

#[test]
fn short_row_under_named_header_is_missing_column() {
    let grid = Grid::from_rows(vec![vec!["Member ID", "Last Weight"], vec!["M1"]]);
    let view = grid.view(Addressing::Named);
    let row = view.row(1).unwrap();

    let err = extract(&row, &FieldDescriptor::named("Last Weight")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing column 'Last Weight' (no default declared)"
    );
}

#[test]
fn extracts_cell_by_header_name() {
    let grid = Grid::from_rows(vec![
        vec!["Member ID", "Last Weight", "Member ID"],
        vec!["M1", "181", "shadow"],
    ]);
    let view = grid.view(Addressing::Named);
    let row = view.row(1).unwrap();

    assert_eq!(
        extract(&row, &FieldDescriptor::named("Last Weight")).unwrap(),
        "181"
    );
    // Repeated header resolves to its first occurrence.
    assert_eq!(
        extract(&row, &FieldDescriptor::named("Member ID")).unwrap(),
        "M1"
    );
}

#[test]
fn unknown_header_without_default_is_missing_column() {
    let grid = Grid::from_rows(vec![vec!["Member ID"], vec!["M1"]]);
    let view = grid.view(Addressing::Named);
    let row = view.row(1).unwrap();

    let err = extract(&row, &FieldDescriptor::named("Fiber %")).unwrap_err();
    assert_eq!(err.to_string(), "missing column 'Fiber %' (no default declared)");

    let fiber = FieldDescriptor::named("Fiber %").or_default("0");
    assert_eq!(extract(&row, &fiber).unwrap(), "0");
}

#[test]
fn composite_joins_both_halves() {
    let grid = positional_grid();
    let view = grid.view(Addressing::Positional);
    let row = view.row(1).unwrap();

    let bp = FieldSpec::composite(
        FieldDescriptor::indexed(2),
        FieldDescriptor::indexed(3),
        "{a} / {b}",
    );
    assert_eq!(extract_spec(&row, &bp).unwrap(), "120 / 80");
}

#[test]
fn composite_half_falls_back_without_aborting() {
    let grid = positional_grid();
    let view = grid.view(Addressing::Positional);
    let row = view.row(1).unwrap();

    let bp = FieldSpec::composite(
        FieldDescriptor::indexed(2),
        FieldDescriptor::indexed(40).or_default("?"),
        "{a} / {b}",
    );
    assert_eq!(extract_spec(&row, &bp).unwrap(), "120 / ?");
}

#[test]
fn join_template_does_not_rescan_substituted_text() {
    assert_eq!(join_template("{a} / {b}", "{b}", "80"), "{b} / 80");
    assert_eq!(join_template("{a}-{c}-{b}", "x", "y"), "x-{c}-y");
    assert_eq!(join_template("no tokens", "x", "y"), "no tokens");
}
