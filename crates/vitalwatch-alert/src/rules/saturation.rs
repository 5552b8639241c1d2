use crate::rules::readings;
use crate::AlertRule;
use vitalwatch_common::types::{format_value, Alert, RecordKind, Sample};

/// Low-saturation and rapid-drop detection for blood oxygen.
///
/// Every reading below `low_threshold` raises its own alert, not only the
/// latest one. A rapid drop is a fall of at least `drop_threshold` points
/// between two consecutive readings taken at most `drop_window_ms` apart;
/// it is dated at the later reading. Low-level alerts come first, followed
/// by rapid-drop alerts.
pub struct BloodSaturationRule {
    pub id: String,
    pub name: String,
    pub low_threshold: f64,
    pub drop_threshold: f64,
    pub drop_window_ms: i64,
}

impl Default for BloodSaturationRule {
    fn default() -> Self {
        Self {
            id: "blood-saturation".into(),
            name: "Blood oxygen saturation".into(),
            low_threshold: 92.0,
            drop_threshold: 5.0,
            drop_window_ms: 10 * 60 * 1000,
        }
    }
}

impl AlertRule for BloodSaturationRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, patient_id: u32, samples: &[Sample]) -> Vec<Alert> {
        let saturations = readings(samples, &RecordKind::OxygenSaturation);

        let mut alerts: Vec<Alert> = saturations
            .iter()
            .filter(|s| s.value < self.low_threshold)
            .map(|s| {
                Alert::new(
                    patient_id,
                    format!("Low Oxygen Saturation: {}%", format_value(s.value)),
                    s.timestamp,
                )
            })
            .collect();

        for pair in saturations.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            let within_window = curr.timestamp - prev.timestamp <= self.drop_window_ms;
            if within_window && prev.value - curr.value >= self.drop_threshold {
                alerts.push(Alert::new(
                    patient_id,
                    format!(
                        "Rapid Oxygen Saturation Drop: {}% to {}",
                        format_value(prev.value),
                        format_value(curr.value)
                    ),
                    curr.timestamp,
                ));
            }
        }

        alerts
    }
}
