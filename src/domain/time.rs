// Timestamp display policies
use chrono::DateTime;
use chrono_tz::Tz;

/// How backend timestamps are rendered for labels and table cells.
#[derive(Debug, Clone, PartialEq)]
pub enum TimePolicy {
    /// Convert to a named timezone and render as `YYYY-MM-DD HH:MM`.
    Zoned(Tz),
    /// Show the backend-supplied timestamp string unmodified.
    Raw,
}

#[derive(Debug, Clone)]
pub struct TimeFormatter {
    policy: TimePolicy,
}

impl TimeFormatter {
    pub fn new(policy: TimePolicy) -> Self {
        Self { policy }
    }

    pub fn zoned(tz: Tz) -> Self {
        Self::new(TimePolicy::Zoned(tz))
    }

    pub fn raw() -> Self {
        Self::new(TimePolicy::Raw)
    }

    /// Format one backend timestamp for display. Unparseable input is shown
    /// as-is; a bad timestamp must never take down the render pipeline.
    pub fn format(&self, ts: &str) -> String {
        match &self.policy {
            TimePolicy::Raw => ts.to_string(),
            TimePolicy::Zoned(tz) => match DateTime::parse_from_rfc3339(ts) {
                Ok(t) => t.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string(),
                Err(_) => ts.to_string(),
            },
        }
    }

    /// X-axis title matching this policy. The chart must never advertise a
    /// zone other than the one used for label formatting.
    pub fn axis_label(&self) -> String {
        match &self.policy {
            TimePolicy::Raw => "Time (UTC)".to_string(),
            TimePolicy::Zoned(tz) if *tz == chrono_tz::Asia::Jerusalem => {
                "Time (Israel)".to_string()
            }
            TimePolicy::Zoned(tz) => format!("Time ({})", tz),
        }
    }
}
