use crate::AlertSink;
use anyhow::Result;
use vitalwatch_common::types::Alert;

/// Publishes every alert to each inner sink in order.
///
/// All sinks are attempted even if an earlier one fails; the first error is
/// returned once every sink has been tried.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Box<dyn AlertSink>>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: Box<dyn AlertSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.sink_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl AlertSink for FanoutSink {
    fn publish(&self, alert: &Alert) -> Result<()> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.publish(alert) {
                tracing::error!(
                    sink = sink.sink_name(),
                    patient_id = %alert.patient_id,
                    error = %e,
                    "Failed to publish alert"
                );
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn sink_name(&self) -> &str {
        "fanout"
    }
}
