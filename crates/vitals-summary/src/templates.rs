/// A fixed natural-language template. Placeholders are `{{ key }}` where
/// `key` is a canonical metric key.
#[derive(Debug, Clone, Copy)]
pub struct SummaryTemplate {
    pub id: &'static str,
    pub body: &'static str,
}

impl SummaryTemplate {
    /// Canonical keys referenced by the template, in order of first use.
    pub fn required_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        let mut rest = self.body;
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else { break };
            let key = after[..end].trim();
            if !keys.contains(&key) {
                keys.push(key);
            }
            rest = &after[end + 2..];
        }
        keys
    }
}

const TWIN_PROGRESS: &str = "\
Your Digital Twin shows moderate engagement, with {{ meal_log }} meal logging and {{ gfy }} GFY. 
Steps: {{ steps }}, Sleep: {{ sleep }} hours. Protein: {{ protein }}%, Fiber: {{ fiber }}%. 

Clinical data:
• Starting HbA1c: {{ start_hba1c }}% → Latest eA1c: {{ latest_ea1c }}%
• Weight: {{ start_weight }} → {{ latest_weight }} lbs
• BMI: {{ start_bmi }} → {{ latest_bmi }}
• Visceral Fat: {{ start_vfat }} → {{ latest_vfat }}
• Blood Pressure: {{ start_bp }} → {{ latest_bp }}

Current medication: {{ medicine }}

Your Twin can heal only what it can see. Improve logging, protein, fiber, steps, and sleep 
to drive deeper metabolic healing and long-term stability.
";

const CGM_PROGRESS: &str = "\
Over the last 7 days your Digital Twin logged {{ meal_log_7d }} of meals with {{ gfy_7d }} GFY.
Steps: {{ steps_7d }}, Sleep: {{ sleep_7d }} hours. Protein: {{ protein_7d }}%, Fiber: {{ fiber_7d }}%.
Time in range: {{ time_in_range_7d }}%.

Clinical data:
• Starting HbA1c: {{ start_hba1c }}% → Latest eA1c: {{ last_ea1c }}%
• Weight: {{ start_weight }} → {{ last_weight }} lbs
• BMI: {{ start_bmi }} → {{ last_bmi }}
• Visceral Fat: {{ start_vfat }} → {{ last_vfat }}
• Blood Pressure: {{ start_bp }} → {{ last_bp }}

Current medication: {{ medicine }}

Your sensor shows how each meal lands. Keep logging and stay in range to lock in the gains.
";

/// Return all registered templates.
pub fn all_templates() -> &'static [SummaryTemplate] {
    static TEMPLATES: [SummaryTemplate; 2] = [
        SummaryTemplate {
            id: "twin_progress",
            body: TWIN_PROGRESS,
        },
        SummaryTemplate {
            id: "cgm_progress",
            body: CGM_PROGRESS,
        },
    ];
    &TEMPLATES
}

/// Look up a template by ID.
pub fn get_template(id: &str) -> Option<&'static SummaryTemplate> {
    all_templates().iter().find(|t| t.id == id)
}
