//! Summary rendering: substitution, purity, and template/mapping agreement.

use vitals_core::models::metrics::CanonicalMetrics;
use vitals_schemas::all_schemas;
use vitals_summary::error::SummaryError;
use vitals_summary::render::{missing_keys, render};
use vitals_summary::templates::{all_templates, get_template};

fn twin_metrics() -> CanonicalMetrics {
    [
        ("meal_log", "72%"),
        ("gfy", "55%"),
        ("steps", "6100"),
        ("sleep", "6.8"),
        ("protein", "0"),
        ("fiber", "0"),
        ("start_hba1c", "8.4"),
        ("latest_ea1c", "6.7"),
        ("start_weight", "210"),
        ("latest_weight", "198"),
        ("start_bmi", "32.1"),
        ("latest_bmi", "30.3"),
        ("start_vfat", "14"),
        ("latest_vfat", "12"),
        ("start_bp", "130 / 86"),
        ("latest_bp", "122 / 80"),
        ("medicine", "Metformin 500mg <bd>"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn renders_twin_progress_paragraph() {
    let summary = render(&twin_metrics(), "twin_progress").unwrap();

    assert!(summary.starts_with(
        "Your Digital Twin shows moderate engagement, with 72% meal logging and 55% GFY."
    ));
    assert!(summary.contains("Protein: 0%, Fiber: 0%."));
    assert!(summary.contains("• Blood Pressure: 130 / 86 → 122 / 80"));
    assert!(summary.ends_with("long-term stability."));
}

#[test]
fn inner_lines_keep_their_trailing_spaces() {
    let summary = render(&twin_metrics(), "twin_progress").unwrap();

    assert!(summary.contains("55% GFY. \nSteps: 6100, Sleep: 6.8 hours."));
    assert!(summary.contains("Fiber: 0%. \n\nClinical data:"));
    assert!(summary.contains("steps, and sleep \nto drive deeper"));
}

#[test]
fn values_are_not_html_escaped() {
    let summary = render(&twin_metrics(), "twin_progress").unwrap();
    assert!(summary.contains("Current medication: Metformin 500mg <bd>"));
}

#[test]
fn rendering_is_deterministic() {
    let metrics = twin_metrics();
    let first = render(&metrics, "twin_progress").unwrap();
    let second = render(&metrics, "twin_progress").unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn absent_key_is_missing_metric() {
    let mut metrics: CanonicalMetrics = twin_metrics()
        .as_map()
        .iter()
        .filter(|(k, _)| k.as_str() != "fiber")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    metrics.insert("unrelated", "x");

    match render(&metrics, "twin_progress") {
        Err(SummaryError::MissingMetric { template_id, key }) => {
            assert_eq!(template_id, "twin_progress");
            assert_eq!(key, "fiber");
        }
        other => panic!("expected MissingMetric, got {other:?}"),
    }
}

#[test]
fn unknown_template_is_rejected() {
    let err = render(&twin_metrics(), "weekly_digest").unwrap_err();
    assert!(matches!(err, SummaryError::UnknownTemplate(id) if id == "weekly_digest"));
}

#[test]
fn required_keys_follow_first_use() {
    let keys = get_template("twin_progress").unwrap().required_keys();
    assert_eq!(&keys[..3], &["meal_log", "gfy", "steps"]);
    assert_eq!(keys.len(), 17);
}

#[test]
fn every_schema_produces_what_its_template_needs() {
    for schema in all_schemas() {
        let Some(template_id) = schema.summary_template() else {
            continue;
        };
        let missing = missing_keys(template_id, &schema.produced_keys()).unwrap();
        assert!(missing.is_empty(), "{}: {missing:?}", schema.id());
    }
}

#[test]
fn every_template_parses() {
    for template in all_templates() {
        let metrics: CanonicalMetrics = template
            .required_keys()
            .into_iter()
            .map(|k| (k, "v"))
            .collect();
        render(&metrics, template.id).unwrap();
    }
}
