use crate::rules::readings;
use crate::AlertRule;
use vitalwatch_common::types::{Alert, RecordKind, Sample};

/// Spike detection on ECG waveform values.
///
/// For each reading from the `window_size`-th onwards, the trailing window
/// (ending at and including that reading) is averaged. The first reading
/// above `threshold_factor` times that average raises a single alert and
/// scanning stops; later spikes in the same history are not reported.
pub struct EcgAnomalyRule {
    pub id: String,
    pub name: String,
    pub kind: RecordKind,
    pub window_size: usize,
    pub threshold_factor: f64,
}

impl Default for EcgAnomalyRule {
    fn default() -> Self {
        Self {
            id: "ecg-anomaly".into(),
            name: "ECG abnormal peak".into(),
            kind: RecordKind::Ecg,
            window_size: 5,
            threshold_factor: 1.5,
        }
    }
}

impl AlertRule for EcgAnomalyRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, patient_id: u32, samples: &[Sample]) -> Vec<Alert> {
        if self.window_size == 0 {
            return Vec::new();
        }
        let waveform = readings(samples, &self.kind);
        if waveform.len() < self.window_size {
            return Vec::new();
        }

        let spike = waveform.windows(self.window_size).find_map(|window| {
            let sum: f64 = window.iter().map(|s| s.value).sum();
            let avg = sum / self.window_size as f64;
            let last = window[window.len() - 1];
            (last.value > avg * self.threshold_factor).then_some(last)
        });

        match spike {
            Some(sample) => vec![Alert::new(
                patient_id,
                "Measured abnormally high ECG record!",
                sample.timestamp,
            )],
            None => Vec::new(),
        }
    }
}
