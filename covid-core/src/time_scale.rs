use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How far back the chart reaches from the most recent entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Week,
    Month,
    #[default]
    Max,
}

impl TimeScale {
    pub const ALL: [TimeScale; 3] = [TimeScale::Week, TimeScale::Month, TimeScale::Max];

    /// Number of trailing entries shown, `None` for the whole history.
    pub fn num_days(self) -> Option<usize> {
        match self {
            TimeScale::Week => Some(7),
            TimeScale::Month => Some(30),
            TimeScale::Max => None,
        }
    }

    /// The trailing part of an ascending series this scale shows.
    ///
    /// Series shorter than the window come back whole.
    pub fn window<T>(self, series: &[T]) -> &[T] {
        let start = self
            .num_days()
            .map_or(0, |days| series.len().saturating_sub(days));
        &series[start..]
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeScale::Week => "Week",
            TimeScale::Month => "Month",
            TimeScale::Max => "Max",
        }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(TimeScale::Week),
            "month" => Ok(TimeScale::Month),
            "max" | "all" => Ok(TimeScale::Max),
            other => Err(format!(
                "unknown time scale '{}' (expected week, month or max)",
                other
            )),
        }
    }
}
