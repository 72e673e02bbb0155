use crate::daily_record::DailyRecord;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Which daily count the chart projects out of a `DailyRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Positive,
    Negative,
    Death,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Negative, Metric::Positive, Metric::Death];

    /// The count this metric selects from a record.
    pub fn project(self, record: &DailyRecord) -> i64 {
        match self {
            Metric::Positive => record.positive_increase,
            Metric::Negative => record.negative_increase,
            Metric::Death => record.death_increase,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Positive => "Positive",
            Metric::Negative => "Negative",
            Metric::Death => "Death",
        }
    }

    /// Line and readout color for this metric.
    pub fn color(self) -> &'static str {
        match self {
            Metric::Positive => "#F5A623",
            Metric::Negative => "#4A90E2",
            Metric::Death => "#D0021B",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Metric::Positive),
            "negative" => Ok(Metric::Negative),
            "death" => Ok(Metric::Death),
            other => Err(format!(
                "unknown metric '{}' (expected positive, negative or death)",
                other
            )),
        }
    }
}
