//! Alert delivery with pluggable sinks.
//!
//! The alert engine hands every generated [`Alert`] to one [`AlertSink`].
//! Built-in sinks write to the tracing log, append to a file, collect in
//! memory, or fan out to several other sinks.

pub mod error;
pub mod sinks;

#[cfg(test)]
mod tests;

use anyhow::Result;
use vitalwatch_common::types::Alert;

/// A one-way destination for alerts.
///
/// Publishing is fire-and-forget from the engine's point of view: a failure
/// is logged and counted, never retried, and never stops evaluation.
pub trait AlertSink: Send + Sync {
    /// Delivers the alert through this sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the alert could not be delivered.
    fn publish(&self, alert: &Alert) -> Result<()>;

    /// Returns the sink type name (e.g., `"log"`, `"file"`).
    fn sink_name(&self) -> &str;
}

impl<T: AlertSink + ?Sized> AlertSink for std::sync::Arc<T> {
    fn publish(&self, alert: &Alert) -> Result<()> {
        (**self).publish(alert)
    }

    fn sink_name(&self) -> &str {
        (**self).sink_name()
    }
}
