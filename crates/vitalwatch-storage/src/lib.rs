//! Patient record storage behind the read contract used by the alert engine.
//!
//! The default implementation ([`engine::InMemoryRecordStore`]) keeps every
//! sample in memory, grouped per patient in insertion order. Samples can be
//! bulk-loaded from CSV exports through [`reader::load_csv`].

pub mod engine;
pub mod error;
pub mod reader;
pub mod window;


use vitalwatch_common::types::Sample;

/// Read access to a patient's timestamped samples.
///
/// Implementations must be safe to share across threads (`Send + Sync`)
/// because one store is read by every evaluation, possibly concurrently.
pub trait RecordStore: Send + Sync {
    /// Returns every sample of `patient_id` whose timestamp lies in the closed
    /// interval `[from, to]`.
    ///
    /// Samples sharing a kind keep their insertion order. Unknown patients,
    /// empty ranges and inverted ranges (`from > to`) yield an empty vector.
    fn records(&self, patient_id: u32, from: i64, to: i64) -> Vec<Sample>;

    /// Returns the ids of all patients with at least one stored sample, in
    /// ascending order.
    fn patient_ids(&self) -> Vec<u32>;
}
