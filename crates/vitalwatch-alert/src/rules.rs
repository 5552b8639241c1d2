pub mod alert_button;
pub mod blood_pressure;
pub mod ecg;
pub mod hypotensive_hypoxemia;
pub mod saturation;

use crate::AlertRule;
use vitalwatch_common::types::{RecordKind, Sample};

/// Switches applied when building the default rule battery.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleOptions {
    /// Require at least one systolic and one saturation sample before the
    /// hypotensive hypoxemia rule may fire.
    pub strict_hypotensive_hypoxemia: bool,
}

/// The built-in rules in registration order.
///
/// Output of the engine is concatenated in this order: systolic pressure,
/// diastolic pressure, saturation, hypotensive hypoxemia, ECG, alert button.
pub fn default_rules(options: RuleOptions) -> Vec<Box<dyn AlertRule>> {
    vec![
        Box::new(blood_pressure::BloodPressureRule::systolic()),
        Box::new(blood_pressure::BloodPressureRule::diastolic()),
        Box::new(saturation::BloodSaturationRule::default()),
        Box::new(hypotensive_hypoxemia::HypotensiveHypoxemiaRule {
            require_both_observed: options.strict_hypotensive_hypoxemia,
            ..Default::default()
        }),
        Box::new(ecg::EcgAnomalyRule::default()),
        Box::new(alert_button::AlertButtonRule::default()),
    ]
}

/// Samples of one kind, in their original order.
pub(crate) fn readings<'a>(samples: &'a [Sample], kind: &RecordKind) -> Vec<&'a Sample> {
    samples.iter().filter(|s| &s.kind == kind).collect()
}
