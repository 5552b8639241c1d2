use crate::AlertSink;
use anyhow::Result;
use chrono::DateTime;
use vitalwatch_common::types::Alert;

/// Writes each alert as a structured `WARN` event to the tracing log.
#[derive(Debug, Clone, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl AlertSink for LogSink {
    fn publish(&self, alert: &Alert) -> Result<()> {
        let at = DateTime::from_timestamp_millis(alert.timestamp)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| alert.timestamp.to_string());
        tracing::warn!(
            patient_id = %alert.patient_id,
            condition = %alert.condition,
            timestamp = alert.timestamp,
            at = %at,
            "Attention! Patient alert"
        );
        Ok(())
    }

    fn sink_name(&self) -> &str {
        "log"
    }
}
