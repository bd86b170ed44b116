//! Mapping-version tables: consistency, full population, and inference.

use std::collections::BTreeSet;

use vitals_core::descriptor::Addressing;
use vitals_core::grid::Grid;
use vitals_core::locate::locate;
use vitals_schemas::{all_schemas, get_schema, infer_schema};

/// A positional sheet `width` columns wide whose data cells read `c{index}`.
fn positional_sheet(width: usize, ids: &[&str]) -> Grid {
    let title: Vec<String> = (0..width).map(|i| format!("title{i}")).collect();
    let mut rows = vec![title];
    for (n, id) in ids.iter().enumerate() {
        let mut row: Vec<String> = (0..width).map(|i| format!("c{i}")).collect();
        row[0] = (n + 1).to_string();
        row[1] = id.to_string();
        rows.push(row);
    }
    Grid::new(rows)
}

fn cgm_sheet() -> Grid {
    let headers = [
        "Member ID", "Last Weight", "Meal Log 7D", "GFY 7D", "Avg Steps 7D", "Avg Sleep 7D",
        "TIR 7D", "Start HbA1c", "Last eA1c", "Start Weight", "Start BMI", "Last BMI",
        "Start SBP", "Start DBP", "Last SBP", "Last DBP",
    ];
    let values = [
        "M100", "181", "80%", "62%", "7200", "6.5", "71", "8.1", "6.9", "196", "31.2",
        "29.0", "120", "80", "118", "76",
    ];
    Grid::from_rows(vec![headers.to_vec(), values.to_vec()])
}

#[test]
fn every_schema_is_consistent() {
    for schema in all_schemas() {
        let problems = schema.check_consistency();
        assert!(problems.is_empty(), "{problems:?}");
    }
}

#[test]
fn schema_ids_are_unique_and_resolvable() {
    let ids: Vec<String> = all_schemas().iter().map(|s| s.id().to_string()).collect();
    let unique: BTreeSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());

    for id in &ids {
        assert_eq!(get_schema(id).unwrap().id(), id);
    }
    assert!(get_schema("nope").is_none());
}

#[test]
fn wide_sheet_maps_every_declared_key() {
    let grid = positional_sheet(61, &["M1"]);
    let schema = get_schema("no_cgm_wide").unwrap();
    let view = grid.view(schema.addressing());
    let row = locate(&view, schema.identifier(), "M1").unwrap().unwrap();

    let metrics = schema.map_row(&row).unwrap();

    let keys: BTreeSet<&str> = metrics.keys().collect();
    let declared: BTreeSet<&str> = schema.produced_keys().into_iter().collect();
    assert_eq!(keys, declared);
    assert_eq!(metrics.get("meal_log"), Some("c11"));
    assert_eq!(metrics.get("protein"), Some("c54"));
    assert_eq!(metrics.get("start_bp"), Some("c30 / c32"));
    assert_eq!(metrics.get("latest_bp"), Some("c31 / c33"));
}

#[test]
fn legacy_sheet_defaults_late_columns() {
    let grid = positional_sheet(45, &["M1"]);
    let schema = get_schema("no_cgm_legacy").unwrap();
    let view = grid.view(schema.addressing());
    let row = locate(&view, schema.identifier(), "M1").unwrap().unwrap();

    let metrics = schema.map_row(&row).unwrap();

    assert_eq!(metrics.len(), schema.fields().len());
    assert_eq!(metrics.get("protein"), Some("0"));
    assert_eq!(metrics.get("fiber"), Some("0"));
    assert_eq!(metrics.get("medicine"), Some(""));
    assert_eq!(metrics.get("start_vfat"), Some("N/A"));
    assert_eq!(metrics.get("sleep"), Some("c41"));
}

#[test]
fn wide_schema_on_narrow_sheet_reports_missing_visceral_fat() {
    let grid = positional_sheet(45, &["M1"]);
    let schema = get_schema("no_cgm_wide").unwrap();
    let view = grid.view(schema.addressing());
    let row = locate(&view, schema.identifier(), "M1").unwrap().unwrap();

    let err = schema.map_row(&row).unwrap_err();
    assert_eq!(err.to_string(), "missing column #59 (no default declared)");
}

#[test]
fn ragged_row_on_wide_sheet_reports_first_unreachable_column() {
    let mut rows = positional_sheet(61, &["M1", "M2"]).rows().to_vec();
    // M2's row stops right after the sleep column.
    rows[2].truncate(42);
    let grid = Grid::new(rows);

    let schema = get_schema("no_cgm_wide").unwrap();
    let view = grid.view(schema.addressing());

    let full = locate(&view, schema.identifier(), "M1").unwrap().unwrap();
    assert!(schema.map_row(&full).is_ok());

    let short = locate(&view, schema.identifier(), "M2").unwrap().unwrap();
    let err = schema.map_row(&short).unwrap_err();
    assert_eq!(err.to_string(), "missing column #59 (no default declared)");
}

#[test]
fn named_sheet_tolerates_reordered_and_absent_optional_columns() {
    let grid = cgm_sheet();
    let schema = get_schema("cgm_named").unwrap();
    let view = grid.view(schema.addressing());
    let row = locate(&view, schema.identifier(), "M100").unwrap().unwrap();

    let metrics = schema.map_row(&row).unwrap();

    assert_eq!(metrics.len(), schema.fields().len());
    assert_eq!(metrics.get("last_weight"), Some("181"));
    assert_eq!(metrics.get("protein_7d"), Some("0"));
    assert_eq!(metrics.get("last_vfat"), Some("N/A"));
    assert_eq!(metrics.get("start_bp"), Some("120 / 80"));
    assert_eq!(metrics.get("time_in_range_7d"), Some("71"));
}

#[test]
fn mapping_is_independent_of_field_order() {
    let grid = cgm_sheet();
    let schema = get_schema("cgm_named").unwrap();
    let view = grid.view(schema.addressing());
    let row = locate(&view, schema.identifier(), "M100").unwrap().unwrap();

    let forward = schema.map_row(&row).unwrap();
    let mut reversed = vitals_core::models::metrics::CanonicalMetrics::new();
    for field in schema.fields().iter().rev() {
        let value = vitals_core::extract::extract_spec(&row, &field.spec).unwrap();
        reversed.insert(field.key.as_str(), value);
    }
    assert_eq!(forward, reversed);
}

#[test]
fn infers_wide_then_legacy_by_width() {
    assert_eq!(infer_schema(&positional_sheet(61, &["M1"])).unwrap().id(), "no_cgm_wide");
    assert_eq!(infer_schema(&positional_sheet(50, &["M1"])).unwrap().id(), "no_cgm_legacy");
    assert!(infer_schema(&positional_sheet(20, &["M1"])).is_none());
}

#[test]
fn infers_named_schema_from_headers() {
    let schema = infer_schema(&cgm_sheet()).unwrap();
    assert_eq!(schema.id(), "cgm_named");
    assert_eq!(schema.addressing(), Addressing::Named);

    let engagement = Grid::from_rows(vec![
        vec!["Member ID", "Coach", "Meal Log 7D", "GFY 7D", "Avg Steps 7D", "Avg Sleep 7D"],
        vec!["M1", "Asha", "50%", "40%", "5000", "7"],
    ]);
    assert_eq!(infer_schema(&engagement).unwrap().id(), "engagement_named");
}

#[test]
fn empty_grid_matches_nothing() {
    assert!(infer_schema(&Grid::default()).is_none());
}
