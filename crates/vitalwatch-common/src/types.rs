use serde::{Deserialize, Serialize};

/// The measurement category of a [`Sample`].
///
/// Kinds round-trip through their text tag. Unrecognized tags are kept as
/// [`RecordKind::Other`] so that rules can skip them by filtering.
///
/// # Examples
///
/// ```
/// use vitalwatch_common::types::RecordKind;
///
/// let kind: RecordKind = "OxygenSaturation".parse().unwrap();
/// assert_eq!(kind, RecordKind::OxygenSaturation);
/// assert_eq!(RecordKind::Ecg.to_string(), "ECG");
/// assert_eq!("HeartRate".parse::<RecordKind>().unwrap(), RecordKind::Other("HeartRate".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordKind {
    SystolicPressure,
    DiastolicPressure,
    OxygenSaturation,
    Ecg,
    AlertButton,
    Other(String),
}

impl RecordKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::SystolicPressure => "SystolicPressure",
            Self::DiastolicPressure => "DiastolicPressure",
            Self::OxygenSaturation => "OxygenSaturation",
            Self::Ecg => "ECG",
            Self::AlertButton => "AlertButton",
            Self::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "SystolicPressure" => Self::SystolicPressure,
            "DiastolicPressure" => Self::DiastolicPressure,
            "OxygenSaturation" => Self::OxygenSaturation,
            "ECG" => Self::Ecg,
            "AlertButton" => Self::AlertButton,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for RecordKind {
    fn from(tag: String) -> Self {
        match tag.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<RecordKind> for String {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// One timestamped measurement for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub patient_id: u32,
    pub value: f64,
    pub kind: RecordKind,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Sample {
    pub fn new(patient_id: u32, value: f64, kind: RecordKind, timestamp: i64) -> Self {
        Self {
            patient_id,
            value,
            kind,
            timestamp,
        }
    }
}

/// An alert raised by a rule for one patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Patient id in its decimal text form.
    pub patient_id: String,
    /// Human-readable description, including the triggering value(s).
    pub condition: String,
    /// Timestamp of the triggering sample (the later one for pairwise checks).
    pub timestamp: i64,
}

impl Alert {
    pub fn new(patient_id: u32, condition: impl Into<String>, timestamp: i64) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            condition: condition.into(),
            timestamp,
        }
    }
}

/// Render a measurement value for alert text.
///
/// Values always carry a fractional part. Very large or very small
/// magnitudes switch to `<mantissa>E<exponent>` notation.
///
/// # Examples
///
/// ```
/// use vitalwatch_common::types::format_value;
///
/// assert_eq!(format_value(185.0), "185.0");
/// assert_eq!(format_value(97.5), "97.5");
/// assert_eq!(format_value(12_000_000.0), "1.2E7");
/// assert_eq!(format_value(0.0001), "1.0E-4");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps a trailing ".0" on whole numbers
        return format!("{value:?}");
    }

    let sci = format!("{value:e}");
    match sci.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => sci,
    }
}
