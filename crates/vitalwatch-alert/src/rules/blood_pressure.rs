use crate::rules::readings;
use crate::AlertRule;
use vitalwatch_common::types::{format_value, Alert, RecordKind, Sample};

/// Minimum change between consecutive readings for a trend, in mmHg.
const TREND_STEP: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureKind {
    Systolic,
    Diastolic,
}

impl PressureKind {
    pub fn record_kind(self) -> RecordKind {
        match self {
            Self::Systolic => RecordKind::SystolicPressure,
            Self::Diastolic => RecordKind::DiastolicPressure,
        }
    }

    /// Critical `(low, high)` bounds; readings strictly outside breach.
    fn critical_bounds(self) -> (f64, f64) {
        match self {
            Self::Systolic => (90.0, 180.0),
            Self::Diastolic => (60.0, 120.0),
        }
    }
}

impl std::fmt::Display for PressureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Systolic => write!(f, "Systolic"),
            Self::Diastolic => write!(f, "Diastolic"),
        }
    }
}

/// Critical-breach and trend detection for one blood pressure component.
///
/// Only the most recent reading is checked against the critical bounds.
/// Every run of three consecutive readings that all rise (or all fall) by
/// more than 10 mmHg per step raises its own trend alert, dated at the
/// third reading.
pub struct BloodPressureRule {
    pub id: String,
    pub name: String,
    pub pressure: PressureKind,
}

impl BloodPressureRule {
    pub fn systolic() -> Self {
        Self {
            id: "blood-pressure-systolic".into(),
            name: "Systolic blood pressure".into(),
            pressure: PressureKind::Systolic,
        }
    }

    pub fn diastolic() -> Self {
        Self {
            id: "blood-pressure-diastolic".into(),
            name: "Diastolic blood pressure".into(),
            pressure: PressureKind::Diastolic,
        }
    }
}

impl AlertRule for BloodPressureRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, patient_id: u32, samples: &[Sample]) -> Vec<Alert> {
        let kind = self.pressure.record_kind();
        let pressures = readings(samples, &kind);

        let Some(latest) = pressures.last() else {
            return Vec::new();
        };

        let mut alerts = Vec::new();

        let (low, high) = self.pressure.critical_bounds();
        if latest.value < low || latest.value > high {
            alerts.push(Alert::new(
                patient_id,
                format!(
                    "Critical threshold breached for {}: {} mmHg",
                    self.pressure,
                    format_value(latest.value)
                ),
                latest.timestamp,
            ));
        }

        for run in pressures.windows(3) {
            let (v1, v2, v3) = (run[0].value, run[1].value, run[2].value);
            let direction = if v2 - v1 > TREND_STEP && v3 - v2 > TREND_STEP {
                "increasing"
            } else if v1 - v2 > TREND_STEP && v2 - v3 > TREND_STEP {
                "decreasing"
            } else {
                continue;
            };
            alerts.push(Alert::new(
                patient_id,
                format!(
                    "{kind} {direction} trend ({}->{}->{})",
                    format_value(v1),
                    format_value(v2),
                    format_value(v3)
                ),
                run[2].timestamp,
            ));
        }

        alerts
    }
}
