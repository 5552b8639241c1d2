use crate::rules::{default_rules, RuleOptions};
use crate::AlertRule;
use chrono::Utc;
use std::sync::{Arc, Mutex, PoisonError};
use vitalwatch_common::types::Alert;
use vitalwatch_notify::AlertSink;
use vitalwatch_storage::window::RecordWindow;
use vitalwatch_storage::RecordStore;

#[derive(Default)]
struct AlertLog {
    alerts: Vec<Alert>,
    publish_failures: usize,
}

/// Runs the registered rules against patients' histories.
///
/// Every call re-reads the full history from the store; nothing carries
/// over between evaluations except the append-only alert log. The log and
/// the sink are driven under one lock, so a generator can be shared across
/// threads evaluating different patients.
pub struct AlertGenerator {
    store: Arc<dyn RecordStore>,
    sink: Arc<dyn AlertSink>,
    rules: Vec<Box<dyn AlertRule>>,
    log: Mutex<AlertLog>,
}

impl AlertGenerator {
    /// Creates a generator with the default rule battery.
    pub fn new(store: Arc<dyn RecordStore>, sink: Arc<dyn AlertSink>) -> Self {
        Self::with_rules(store, sink, default_rules(RuleOptions::default()))
    }

    pub fn with_rules(
        store: Arc<dyn RecordStore>,
        sink: Arc<dyn AlertSink>,
        rules: Vec<Box<dyn AlertRule>>,
    ) -> Self {
        Self {
            store,
            sink,
            rules,
            log: Mutex::new(AlertLog::default()),
        }
    }

    /// Evaluates everything stored for `patient_id` up to the current time.
    pub fn evaluate(&self, patient_id: u32) -> Vec<Alert> {
        self.evaluate_at(patient_id, Utc::now().timestamp_millis())
    }

    /// Evaluates the patient's samples in `[0, now_ms]`.
    ///
    /// Alerts are concatenated in rule registration order, each rule keeping
    /// its own emission order. They are appended to the log and published
    /// before returning; a failed publish is logged and counted but the
    /// remaining alerts are still delivered.
    pub fn evaluate_at(&self, patient_id: u32, now_ms: i64) -> Vec<Alert> {
        let samples = self.store.records(patient_id, 0, now_ms);
        let window = RecordWindow::new(patient_id, 0, now_ms, &samples);

        let mut alerts = Vec::new();
        for rule in &self.rules {
            let raised = rule.evaluate(window.patient_id(), window.samples());
            if !raised.is_empty() {
                tracing::debug!(
                    rule_id = rule.id(),
                    patient_id,
                    count = raised.len(),
                    "Rule raised alerts"
                );
            }
            alerts.extend(raised);
        }

        self.record(&alerts);

        tracing::debug!(
            patient_id,
            samples = window.len(),
            alerts = alerts.len(),
            "Patient evaluated"
        );
        alerts
    }

    /// Evaluates every patient known to the store, in ascending id order.
    pub fn evaluate_all(&self) -> Vec<Alert> {
        let now_ms = Utc::now().timestamp_millis();
        self.store
            .patient_ids()
            .into_iter()
            .flat_map(|id| self.evaluate_at(id, now_ms))
            .collect()
    }

    /// Copy of every alert generated so far.
    pub fn generated_alerts(&self) -> Vec<Alert> {
        self.lock_log().alerts.clone()
    }

    /// Number of alerts the sink failed to accept.
    pub fn publish_failures(&self) -> usize {
        self.lock_log().publish_failures
    }

    fn record(&self, alerts: &[Alert]) {
        let mut log = self.lock_log();
        for alert in alerts {
            log.alerts.push(alert.clone());
            if let Err(e) = self.sink.publish(alert) {
                log.publish_failures += 1;
                tracing::error!(
                    sink = self.sink.sink_name(),
                    patient_id = %alert.patient_id,
                    condition = %alert.condition,
                    error = %e,
                    "Failed to publish alert"
                );
            }
        }
    }

    fn lock_log(&self) -> std::sync::MutexGuard<'_, AlertLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
