use crate::error::NotifyError;
use crate::AlertSink;
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use vitalwatch_common::types::Alert;

/// Collects published alerts in memory.
///
/// While [`MemorySink::set_failing`] is on, every publish is rejected with
/// [`NotifyError::Unavailable`] and nothing is recorded.
#[derive(Default)]
pub struct MemorySink {
    alerts: Mutex<Vec<Alert>>,
    failing: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of everything published so far.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.alerts.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AlertSink for MemorySink {
    fn publish(&self, alert: &Alert) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifyError::Unavailable("memory sink set to fail".to_string()).into());
        }
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(alert.clone());
        Ok(())
    }

    fn sink_name(&self) -> &str {
        "memory"
    }
}
