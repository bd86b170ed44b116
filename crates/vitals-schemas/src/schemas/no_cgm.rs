use std::sync::LazyLock;

use vitals_core::descriptor::{Addressing, ColumnAddress};

use crate::field::{at, pressure, MetricField};
use crate::SchemaVersion;

/// Member ID lives in column B; column A is a running row number.
static IDENTIFIER: ColumnAddress = ColumnAddress::Index(1);

/// No-CGM coaching sheet, current wide layout (through column BI).
///
/// Protein, fiber and medication were added late and are still missing from
/// some tabs, so they carry defaults. Visceral fat is required.
pub struct NoCgmWide;

impl SchemaVersion for NoCgmWide {
    fn id(&self) -> &str {
        "no_cgm_wide"
    }

    fn name(&self) -> &str {
        "No CGM coaching sheet (wide)"
    }

    fn addressing(&self) -> Addressing {
        Addressing::Positional
    }

    fn identifier(&self) -> &ColumnAddress {
        &IDENTIFIER
    }

    fn fields(&self) -> &[MetricField] {
        static FIELDS: LazyLock<Vec<MetricField>> = LazyLock::new(|| no_cgm_fields(false));
        &FIELDS
    }

    fn summary_template(&self) -> Option<&str> {
        Some("twin_progress")
    }
}

/// No-CGM coaching sheet, legacy narrow layout that predates the visceral
/// fat columns. Same positions as [`NoCgmWide`]; every late column defaults.
pub struct NoCgmLegacy;

impl SchemaVersion for NoCgmLegacy {
    fn id(&self) -> &str {
        "no_cgm_legacy"
    }

    fn name(&self) -> &str {
        "No CGM coaching sheet (legacy narrow)"
    }

    fn addressing(&self) -> Addressing {
        Addressing::Positional
    }

    fn identifier(&self) -> &ColumnAddress {
        &IDENTIFIER
    }

    fn fields(&self) -> &[MetricField] {
        static FIELDS: LazyLock<Vec<MetricField>> = LazyLock::new(|| no_cgm_fields(true));
        &FIELDS
    }

    fn summary_template(&self) -> Option<&str> {
        Some("twin_progress")
    }
}

fn no_cgm_fields(legacy: bool) -> Vec<MetricField> {
    let vfat = |index| {
        if legacy {
            at(index).or_default("N/A")
        } else {
            at(index)
        }
    };

    vec![
        // Engagement
        MetricField::new("meal_log", at(11)).describe("Meal logging rate"),
        MetricField::new("gfy", at(12)).describe("Green food yield"),
        MetricField::new("steps", at(37)),
        MetricField::new("sleep", at(41)).describe("Average sleep, hours"),
        MetricField::new("protein", at(54).or_default("0")).describe("Protein, % of target"),
        MetricField::new("fiber", at(53).or_default("0")).describe("Fiber, % of target"),
        // Clinical
        MetricField::new("start_hba1c", at(15)),
        MetricField::new("latest_ea1c", at(19)),
        MetricField::new("start_weight", at(21)),
        MetricField::new("latest_weight", at(23)),
        MetricField::new("start_bmi", at(27)),
        MetricField::new("latest_bmi", at(28)),
        MetricField::new("start_vfat", vfat(59)),
        MetricField::new("latest_vfat", vfat(60)),
        MetricField::new("start_bp", pressure(at(30), at(32))),
        MetricField::new("latest_bp", pressure(at(31), at(33))),
        MetricField::new("medicine", at(52).or_default("")),
    ]
}
