//! Alert evaluation engine for patient vital signs.
//!
//! The [`engine::AlertGenerator`] pulls a patient's full sample history from
//! a [`vitalwatch_storage::RecordStore`], runs every registered
//! [`AlertRule`] over it, and publishes the resulting alerts to a
//! [`vitalwatch_notify::AlertSink`]. Built-in rules cover blood pressure,
//! oxygen saturation, ECG anomalies, hypotensive hypoxemia, and the manual
//! alert button.

pub mod engine;
pub mod priority;
pub mod rules;


use vitalwatch_common::types::{Alert, Sample};

/// A rule that inspects a patient's sample history and produces alerts.
///
/// Rules are pure: the same input always yields the same alerts in the same
/// order, and the input slice is only filtered and iterated, never
/// reordered. Samples of kinds a rule does not handle are ignored, and a
/// history without matching samples yields no alerts.
pub trait AlertRule: Send + Sync {
    /// Unique identifier for this rule instance (e.g., `"blood-saturation"`).
    fn id(&self) -> &str;

    /// Human-readable name for this rule.
    fn name(&self) -> &str;

    /// Evaluates the complete sample history of one patient.
    fn evaluate(&self, patient_id: u32, samples: &[Sample]) -> Vec<Alert>;
}
