use crate::rules::readings;
use crate::AlertRule;
use vitalwatch_common::types::{Alert, RecordKind, Sample};

/// Translates each manual alert-button event into an alert.
///
/// A value of exactly `1.0` is a press; anything else is a release.
/// Repeated events are not collapsed.
pub struct AlertButtonRule {
    pub id: String,
    pub name: String,
}

impl Default for AlertButtonRule {
    fn default() -> Self {
        Self {
            id: "alert-button".into(),
            name: "Manual alert button".into(),
        }
    }
}

impl AlertRule for AlertButtonRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, patient_id: u32, samples: &[Sample]) -> Vec<Alert> {
        readings(samples, &RecordKind::AlertButton)
            .into_iter()
            .map(|s| {
                let action = if s.value == 1.0 { "pressed" } else { "released" };
                Alert::new(patient_id, format!("Alert button {action}"), s.timestamp)
            })
            .collect()
    }
}
