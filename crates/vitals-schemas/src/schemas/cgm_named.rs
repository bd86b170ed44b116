use std::sync::LazyLock;

use vitals_core::descriptor::{Addressing, ColumnAddress};

use crate::field::{col, pressure, MetricField};
use crate::SchemaVersion;

/// CGM coaching sheet with a header row. Columns are found by header text,
/// so reordering in the sheet is harmless.
pub struct CgmNamed;

impl SchemaVersion for CgmNamed {
    fn id(&self) -> &str {
        "cgm_named"
    }

    fn name(&self) -> &str {
        "CGM coaching sheet (named headers)"
    }

    fn addressing(&self) -> Addressing {
        Addressing::Named
    }

    fn identifier(&self) -> &ColumnAddress {
        static IDENTIFIER: LazyLock<ColumnAddress> =
            LazyLock::new(|| ColumnAddress::Name("Member ID".to_string()));
        &IDENTIFIER
    }

    fn fields(&self) -> &[MetricField] {
        static FIELDS: LazyLock<Vec<MetricField>> = LazyLock::new(|| {
            vec![
                MetricField::new("meal_log_7d", col("Meal Log 7D")),
                MetricField::new("gfy_7d", col("GFY 7D")),
                MetricField::new("steps_7d", col("Avg Steps 7D")),
                MetricField::new("sleep_7d", col("Avg Sleep 7D")),
                MetricField::new("protein_7d", col("Protein % 7D").or_default("0")),
                MetricField::new("fiber_7d", col("Fiber % 7D").or_default("0")),
                MetricField::new("time_in_range_7d", col("TIR 7D"))
                    .describe("Share of CGM readings in range, %"),
                MetricField::new("start_hba1c", col("Start HbA1c")),
                MetricField::new("last_ea1c", col("Last eA1c")),
                MetricField::new("start_weight", col("Start Weight")),
                MetricField::new("last_weight", col("Last Weight")),
                MetricField::new("start_bmi", col("Start BMI")),
                MetricField::new("last_bmi", col("Last BMI")),
                MetricField::new("start_vfat", col("Start Visceral Fat").or_default("N/A")),
                MetricField::new("last_vfat", col("Last Visceral Fat").or_default("N/A")),
                MetricField::new("start_bp", pressure(col("Start SBP"), col("Start DBP"))),
                MetricField::new("last_bp", pressure(col("Last SBP"), col("Last DBP"))),
                MetricField::new("medicine", col("Current Medicine").or_default("")),
            ]
        });
        &FIELDS
    }

    fn summary_template(&self) -> Option<&str> {
        Some("cgm_progress")
    }
}
