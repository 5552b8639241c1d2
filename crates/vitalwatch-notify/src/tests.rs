use crate::error::NotifyError;
use crate::sinks::{FanoutSink, FileSink, LogSink, MemorySink};
use crate::AlertSink;
use std::sync::Arc;
use tempfile::TempDir;
use vitalwatch_common::types::Alert;

fn sample_alert(condition: &str) -> Alert {
    Alert::new(12, condition, 1_700_000_000_000)
}

#[test]
fn file_sink_appends_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("alerts.log");
    let sink = FileSink::open(&path).unwrap();

    sink.publish(&sample_alert("Low Oxygen Saturation: 88.0%")).unwrap();
    sink.publish(&sample_alert("Alert button pressed")).unwrap();

    let contents = std::fs::read_to_string(sink.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Patient ID: 12, Timestamp: 1700000000000, Condition: Low Oxygen Saturation: 88.0%"
    );
    assert!(lines[1].ends_with("Condition: Alert button pressed"));
}

#[test]
fn file_sink_reopen_keeps_existing_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alerts.log");

    FileSink::open(&path)
        .unwrap()
        .publish(&sample_alert("first"))
        .unwrap();
    FileSink::open(&path)
        .unwrap()
        .publish(&sample_alert("second"))
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn file_sink_open_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let result: crate::error::Result<FileSink> = FileSink::open(blocker.join("alerts.log"));
    assert!(matches!(result, Err(NotifyError::Io(_))));
}

#[test]
fn memory_sink_records_until_failing() {
    let sink = MemorySink::new();
    sink.publish(&sample_alert("a")).unwrap();

    sink.set_failing(true);
    let err = sink.publish(&sample_alert("b")).unwrap_err();
    assert!(err.to_string().contains("unavailable"));

    sink.set_failing(false);
    sink.publish(&sample_alert("c")).unwrap();

    let conditions: Vec<String> = sink.alerts().into_iter().map(|a| a.condition).collect();
    assert_eq!(conditions, vec!["a", "c"]);
}

#[test]
fn log_sink_never_fails() {
    let sink = LogSink::new();
    assert!(sink.publish(&sample_alert("Alert button released")).is_ok());
    assert_eq!(sink.sink_name(), "log");
}

#[test]
fn fanout_attempts_every_sink() {
    let broken = Arc::new(MemorySink::new());
    broken.set_failing(true);
    let healthy = Arc::new(MemorySink::new());

    let fanout = FanoutSink::new(vec![
        Box::new(Arc::clone(&broken)),
        Box::new(Arc::clone(&healthy)),
    ]);
    assert_eq!(fanout.sink_names(), vec!["memory", "memory"]);

    let result = fanout.publish(&sample_alert("Measured abnormally high ECG record!"));
    assert!(result.is_err());
    assert!(broken.is_empty());
    assert_eq!(healthy.len(), 1);
}

#[test]
fn empty_fanout_succeeds() {
    let fanout = FanoutSink::default();
    assert!(fanout.is_empty());
    assert!(fanout.publish(&sample_alert("x")).is_ok());
}
