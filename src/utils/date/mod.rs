// Date utility functions
// Canonical YYYY-MM-DD handling and month arithmetic shared by every date path

use chrono::{Datelike, NaiveDate};

/// Format used for every stored and compared calendar date.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render a date in canonical `YYYY-MM-DD` form.
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Parse a canonical `YYYY-MM-DD` string.
///
/// Only strings that format back to themselves are accepted, so `2025-1-5`
/// or `2025-02-30` yield `None` rather than a second spelling of a date.
pub fn parse_canonical_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, CANONICAL_DATE_FORMAT)
        .ok()
        .filter(|date| canonical_date(*date) == value)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in a month, taken as the day before the 1st of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Shift a date by whole months, returning the 1st of the resulting month.
/// Years roll over in both directions. A shift past the representable range
/// stays on the month of `date`.
pub fn shift_month(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (date.year() * 12 + date.month0() as i32).saturating_add(delta_months);
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_else(|| first_of_month(date))
}

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Serde adapter storing a `NaiveDate` as its canonical string.
pub mod canonical {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{canonical_date, parse_canonical_date};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&canonical_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_canonical_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("'{raw}' is not a YYYY-MM-DD date")))
    }
}

/// Serde adapter for informational creation timestamps.
///
/// Serializes like chrono's default. On load, a missing, non-string or
/// unparseable value becomes the Unix epoch instead of failing the record.
pub mod lenient_timestamp {
    use chrono::{DateTime, FixedOffset, Local};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(timestamp: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        timestamp.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|value| value.parse::<DateTime<FixedOffset>>().ok())
            .map(|timestamp| timestamp.with_timezone(&Local))
            .unwrap_or_default())
    }
}
