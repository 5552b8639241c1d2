use vitalwatch_common::types::{RecordKind, Sample};

/// A read-only, time-bounded view over one patient's samples.
///
/// The window borrows the samples it was built from and never reorders
/// them; kind filters preserve the original order.
#[derive(Debug, Clone, Copy)]
pub struct RecordWindow<'a> {
    patient_id: u32,
    from: i64,
    to: i64,
    samples: &'a [Sample],
}

impl<'a> RecordWindow<'a> {
    pub fn new(patient_id: u32, from: i64, to: i64, samples: &'a [Sample]) -> Self {
        Self {
            patient_id,
            from,
            to,
            samples,
        }
    }

    pub fn patient_id(&self) -> u32 {
        self.patient_id
    }

    /// Inclusive lower bound of the window, in epoch milliseconds.
    pub fn from(&self) -> i64 {
        self.from
    }

    /// Inclusive upper bound of the window, in epoch milliseconds.
    pub fn to(&self) -> i64 {
        self.to
    }

    pub fn samples(&self) -> &'a [Sample] {
        self.samples
    }

    /// Samples of a single kind, in stored order.
    pub fn of_kind<'k>(&self, kind: &'k RecordKind) -> impl Iterator<Item = &'a Sample> + 'k
    where
        'a: 'k,
    {
        self.samples.iter().filter(move |s| &s.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
