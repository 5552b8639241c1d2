//! Priority tagging and repeat scheduling for raised alerts.
//!
//! Both helpers are pure. Repeat bookkeeping lives in a [`RepeatCounter`]
//! owned by the caller, so replaying the same sequence of calls always gives
//! the same output.

use vitalwatch_common::types::Alert;

/// Alert priority, ordered from lowest to highest.
///
/// # Examples
///
/// ```
/// use vitalwatch_alert::priority::Priority;
///
/// let p: Priority = "high".parse().unwrap();
/// assert_eq!(p, Priority::High);
/// assert_eq!(p.weight(), 3);
/// assert_eq!("urgent".parse::<Priority>().unwrap(), Priority::Low);
/// assert!(Priority::Critical > Priority::Medium);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Returns a copy of `alert` whose condition carries this priority.
    pub fn tag(self, alert: &Alert) -> Alert {
        Alert {
            condition: format!("[{self} PRIORITY] {}", alert.condition),
            ..alert.clone()
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = std::convert::Infallible;

    /// Unrecognized levels fall back to [`Priority::Low`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "CRITICAL" => Self::Critical,
            "HIGH" => Self::High,
            "MEDIUM" => Self::Medium,
            _ => Self::Low,
        })
    }
}

/// Number of repeats already issued for one alert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatCounter {
    issued: u32,
}

impl RepeatCounter {
    pub fn issued(&self) -> u32 {
        self.issued
    }
}

/// How often, and how many times, a high-priority alert is re-announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatPolicy {
    pub interval_ms: u64,
    pub max_repeats: u32,
}

impl RepeatPolicy {
    pub fn new(interval_ms: u64, max_repeats: u32) -> Self {
        Self {
            interval_ms,
            max_repeats,
        }
    }

    /// Only `High` and `Critical` alerts are repeated.
    pub fn applies_to(&self, priority: Priority) -> bool {
        priority >= Priority::High
    }

    /// Issues the next repeat message for `alert`, advancing `counter`.
    ///
    /// Returns `None` once `max_repeats` have been issued or when the
    /// priority is below `High`; the counter is left untouched in that case.
    pub fn next_repeat(
        &self,
        alert: &Alert,
        priority: Priority,
        counter: &mut RepeatCounter,
    ) -> Option<String> {
        if !self.applies_to(priority) || self.is_finished(counter) {
            return None;
        }
        counter.issued += 1;
        Some(format!(
            "[REPEATED {}/{}] {} (Patient: {}), interval: {}ms",
            counter.issued, self.max_repeats, alert.condition, alert.patient_id, self.interval_ms
        ))
    }

    pub fn is_finished(&self, counter: &RepeatCounter) -> bool {
        counter.issued >= self.max_repeats
    }
}
