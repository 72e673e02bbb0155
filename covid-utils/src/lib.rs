//! Shared utility functions for the COVID tracker crates.

/// Date utility functions
pub mod dates {
    use anyhow::anyhow;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

    /// Timestamp format used by the COVID Tracking API (`dateChecked`).
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Date format shown under the chart, e.g. "Mar 08, 2021".
    pub const DISPLAY_FORMAT: &str = "%b %d, %Y";

    /// Length of a `TIMESTAMP_FORMAT` string; anything after it is ignored.
    const TIMESTAMP_LEN: usize = 19;

    /// Format a NaiveDate as "MMM dd, yyyy"
    pub fn format_display_date(date: &NaiveDate) -> String {
        date.format(DISPLAY_FORMAT).to_string()
    }

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYYMMDD" format (the API's integer `date` key)
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y%m%d")?)
    }

    /// Parse an API timestamp such as "2021-03-07T21:00:00Z".
    ///
    /// Only the leading `yyyy-MM-ddTHH:mm:ss` part is read. The feed stamps
    /// end-of-day records with hour 24, so out-of-range time fields roll over
    /// into the following day instead of failing.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        let head = s
            .get(..TIMESTAMP_LEN)
            .ok_or_else(|| anyhow!("timestamp too short: {:?}", s))?;
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(head, TIMESTAMP_FORMAT) {
            return Ok(timestamp);
        }

        let day = head
            .get(..10)
            .ok_or_else(|| anyhow!("malformed date in {:?}", s))?;
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")?;
        let field = |from: usize| -> anyhow::Result<i64> {
            let text = head
                .get(from..from + 2)
                .filter(|text| text.bytes().all(|b| b.is_ascii_digit()))
                .ok_or_else(|| anyhow!("malformed time in {:?}", s))?;
            Ok(text.parse::<i64>()?)
        };
        let (hours, minutes, seconds) = (field(11)?, field(14)?, field(17)?);
        Ok(date.and_time(NaiveTime::MIN)
            + TimeDelta::hours(hours)
            + TimeDelta::minutes(minutes)
            + TimeDelta::seconds(seconds))
    }

}

/// Number utility functions
pub mod numbers {
    /// Digit group separator (en-US).
    pub const GROUP_SEPARATOR: char = ',';

    /// Format a count with thousands separators, e.g. 1234567 -> "1,234,567".
    pub fn format_count(value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            out.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(GROUP_SEPARATOR);
            }
            out.push(c);
        }
        out
    }

}
