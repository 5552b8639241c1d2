use crate::RecordStore;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use vitalwatch_common::types::{RecordKind, Sample};

/// In-memory store keyed by patient id.
///
/// Each patient's samples are kept in insertion order, which is also the
/// order returned by [`RecordStore::records`].
#[derive(Default)]
pub struct InMemoryRecordStore {
    patients: RwLock<BTreeMap<u32, Vec<Sample>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&self, patient_id: u32, value: f64, kind: RecordKind, timestamp: i64) {
        self.insert(Sample::new(patient_id, value, kind, timestamp));
    }

    pub fn insert(&self, sample: Sample) {
        let mut patients = self.patients.write().unwrap_or_else(PoisonError::into_inner);
        patients.entry(sample.patient_id).or_default().push(sample);
    }

    /// Total number of samples across all patients.
    pub fn len(&self) -> usize {
        let patients = self.patients.read().unwrap_or_else(PoisonError::into_inner);
        patients.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.patients
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl RecordStore for InMemoryRecordStore {
    fn records(&self, patient_id: u32, from: i64, to: i64) -> Vec<Sample> {
        if from > to {
            return Vec::new();
        }
        let patients = self.patients.read().unwrap_or_else(PoisonError::into_inner);
        patients
            .get(&patient_id)
            .map(|samples| {
                samples
                    .iter()
                    .filter(|s| (from..=to).contains(&s.timestamp))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn patient_ids(&self) -> Vec<u32> {
        let patients = self.patients.read().unwrap_or_else(PoisonError::into_inner);
        patients
            .iter()
            .filter(|(_, samples)| !samples.is_empty())
            .map(|(id, _)| *id)
            .collect()
    }
}
