use crate::config::{ServerConfig, SinkConfig};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use vitalwatch_alert::engine::AlertGenerator;
use vitalwatch_alert::rules::{default_rules, RuleOptions};
use vitalwatch_notify::sinks::{FanoutSink, FileSink, LogSink};
use vitalwatch_notify::AlertSink;
use vitalwatch_storage::engine::InMemoryRecordStore;
use vitalwatch_storage::reader::load_csv;
use vitalwatch_storage::RecordStore;

/// Outcome of one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub samples: usize,
    pub patients: usize,
    pub alerts: usize,
    pub publish_failures: usize,
}

/// Builds the configured sinks behind a single fan-out sink.
pub fn build_sink(config: &SinkConfig) -> Result<Arc<dyn AlertSink>> {
    let mut fanout = FanoutSink::default();
    if config.log {
        fanout.push(Box::new(LogSink::new()));
    }
    if let Some(path) = &config.file {
        let sink = FileSink::open(path)
            .map_err(|e| anyhow::anyhow!("Failed to open alert file '{}': {}", path, e))?;
        fanout.push(Box::new(sink));
    }
    if fanout.is_empty() {
        tracing::warn!("No alert sinks configured; alerts are only kept in memory");
    }
    Ok(Arc::new(fanout))
}

/// Loads the data file, evaluates every patient once, and publishes the
/// resulting alerts.
pub fn run(config: &ServerConfig) -> Result<RunSummary> {
    let store = Arc::new(InMemoryRecordStore::new());
    let samples = load_csv(Path::new(&config.data_file), &store)?;

    let sink = build_sink(&config.sinks)?;
    let rules = default_rules(RuleOptions {
        strict_hypotensive_hypoxemia: config.rules.strict_hypotensive_hypoxemia,
    });
    let generator = AlertGenerator::with_rules(store.clone(), sink, rules);

    let alerts = generator.evaluate_all();
    let summary = RunSummary {
        samples,
        patients: store.patient_ids().len(),
        alerts: alerts.len(),
        publish_failures: generator.publish_failures(),
    };

    tracing::info!(
        samples = summary.samples,
        patients = summary.patients,
        alerts = summary.alerts,
        publish_failures = summary.publish_failures,
        "Evaluation finished"
    );
    Ok(summary)
}
