use crate::AlertRule;
use vitalwatch_common::types::{format_value, Alert, RecordKind, Sample};

/// Compound alert for low systolic pressure together with low saturation.
///
/// The whole history is scanned once, keeping the last systolic and the
/// last saturation value (both start at `0.0`) and the timestamp of
/// whichever of the two was seen last. One alert fires when both final
/// values are under their thresholds.
///
/// A history with neither kind yields nothing. Otherwise the `0.0` starting
/// values stand in for a missing kind, so a patient with low systolic
/// pressure and no saturation readings at all still fires. Set
/// `require_both_observed` to demand at least one reading of each kind.
///
/// Staying silent on a history with neither kind differs from the legacy
/// output, which reported `systolic=0.0 mmHg, saturation=0.0%` at timestamp
/// `0` for such patients.
pub struct HypotensiveHypoxemiaRule {
    pub id: String,
    pub name: String,
    pub systolic_threshold: f64,
    pub saturation_threshold: f64,
    pub require_both_observed: bool,
}

impl Default for HypotensiveHypoxemiaRule {
    fn default() -> Self {
        Self {
            id: "hypotensive-hypoxemia".into(),
            name: "Hypotensive hypoxemia".into(),
            systolic_threshold: 90.0,
            saturation_threshold: 92.0,
            require_both_observed: false,
        }
    }
}

impl AlertRule for HypotensiveHypoxemiaRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, patient_id: u32, samples: &[Sample]) -> Vec<Alert> {
        let mut systolic = 0.0;
        let mut saturation = 0.0;
        let mut seen_systolic = false;
        let mut seen_saturation = false;
        let mut timestamp = 0;

        for sample in samples {
            match sample.kind {
                RecordKind::SystolicPressure => {
                    systolic = sample.value;
                    seen_systolic = true;
                    timestamp = sample.timestamp;
                }
                RecordKind::OxygenSaturation => {
                    saturation = sample.value;
                    seen_saturation = true;
                    timestamp = sample.timestamp;
                }
                _ => {}
            }
        }

        let observed = if self.require_both_observed {
            seen_systolic && seen_saturation
        } else {
            seen_systolic || seen_saturation
        };
        if !observed {
            return Vec::new();
        }

        if systolic < self.systolic_threshold && saturation < self.saturation_threshold {
            vec![Alert::new(
                patient_id,
                format!(
                    "Hypotensive Hypoxemia: systolic={} mmHg, saturation={}%",
                    format_value(systolic),
                    format_value(saturation)
                ),
                timestamp,
            )]
        } else {
            Vec::new()
        }
    }
}
