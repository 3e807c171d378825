use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// `date(1)` style layout, e.g. "Wed Dec  8 12:00:00 UTC 2021"
pub const UNIX_DATE_FORMAT: &str = "%a %b %e %H:%M:%S UTC %Y";

/// Unit of a Unix timestamp value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    #[default]
    Seconds,
    Milliseconds,
}

/// Rendered timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampOutput {
    pub value: i64,
    pub unit: TimestampUnit,
    pub utc: String,
    pub rfc3339: String,
}

/// Convert a Unix timestamp into its UTC representations
///
/// Returns an error if the value falls outside the range chrono can represent.
pub fn format_unix_timestamp(value: i64, unit: TimestampUnit) -> Result<TimestampOutput, String> {
    let datetime = match unit {
        TimestampUnit::Seconds => DateTime::<Utc>::from_timestamp(value, 0),
        TimestampUnit::Milliseconds => DateTime::<Utc>::from_timestamp_millis(value),
    }
    .ok_or_else(|| format!("timestamp {value} is out of range"))?;

    let precision = match unit {
        TimestampUnit::Seconds => SecondsFormat::Secs,
        TimestampUnit::Milliseconds => SecondsFormat::Millis,
    };

    Ok(TimestampOutput {
        value,
        unit,
        utc: datetime.format(UNIX_DATE_FORMAT).to_string(),
        rfc3339: datetime.to_rfc3339_opts(precision, true),
    })
}
