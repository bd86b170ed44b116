use std::sync::LazyLock;

use vitals_core::descriptor::{Addressing, ColumnAddress};

use crate::field::{col, MetricField};
use crate::SchemaVersion;

/// Engagement-only export: app usage per member, no clinical columns and
/// no summary paragraph.
pub struct EngagementNamed;

impl SchemaVersion for EngagementNamed {
    fn id(&self) -> &str {
        "engagement_named"
    }

    fn name(&self) -> &str {
        "Engagement export"
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
                MetricField::new("member_name", col("Member Name").or_default("")),
                MetricField::new("coach", col("Coach").or_default("")),
                MetricField::new("meal_log_7d", col("Meal Log 7D")),
                MetricField::new("gfy_7d", col("GFY 7D")),
                MetricField::new("steps_7d", col("Avg Steps 7D")),
                MetricField::new("sleep_7d", col("Avg Sleep 7D")),
                MetricField::new("last_app_open", col("Last App Open").or_default("")),
            ]
        });
        &FIELDS
    }
}
