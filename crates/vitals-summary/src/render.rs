use tera::{Context, Tera};
use tracing::debug;

use vitals_core::models::metrics::CanonicalMetrics;

use crate::error::SummaryError;
use crate::templates::{get_template, SummaryTemplate};

/// Keys a template needs that `produced` does not supply.
pub fn missing_keys(template_id: &str, produced: &[&str]) -> Result<Vec<String>, SummaryError> {
    let template = lookup(template_id)?;
    Ok(template
        .required_keys()
        .into_iter()
        .filter(|key| !produced.contains(key))
        .map(str::to_string)
        .collect())
}

/// Render the template `template_id` over `metrics`.
///
/// Pure: the same map always yields the same bytes. Every referenced key must
/// be present; a gap means the mapping and template have drifted apart.
pub fn render(metrics: &CanonicalMetrics, template_id: &str) -> Result<String, SummaryError> {
    let template = lookup(template_id)?;

    if let Some(key) = template
        .required_keys()
        .into_iter()
        .find(|key| !metrics.contains_key(key))
    {
        return Err(SummaryError::MissingMetric {
            template_id: template.id.to_string(),
            key: key.to_string(),
        });
    }

    // No file extension on the name, so Tera leaves values unescaped.
    let mut tera = Tera::default();
    tera.add_raw_template(template.id, template.body)
        .map_err(|e| SummaryError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(metrics)?;
    let context =
        Context::from_value(value).map_err(|e| SummaryError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template.id, &context)?;
    debug!(template = template.id, "summary rendered");
    Ok(rendered.trim().to_string())
}

fn lookup(template_id: &str) -> Result<&'static SummaryTemplate, SummaryError> {
    get_template(template_id).ok_or_else(|| SummaryError::UnknownTemplate(template_id.to_string()))
}
