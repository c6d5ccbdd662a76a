use crate::error::{BalanceSheetError, Result};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};

/// Shifts `timestamp` by `months` calendar months, keeping the day-of-month
/// and time-of-day fixed.
///
/// A day that does not exist in the target month rolls forward into the
/// following month, so 2021-01-31 plus one month is 2021-03-03 and
/// 2020-01-31 plus one month is 2020-03-02.
pub fn add_months(timestamp: DateTime<Utc>, months: i32) -> Result<DateTime<Utc>> {
    let total = timestamp.year() * 12 + timestamp.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    let date = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(timestamp.day() - 1))))
        .ok_or_else(|| {
            BalanceSheetError::DateError(format!(
                "{} shifted by {} months is out of range",
                timestamp, months
            ))
        })?;

    Ok(date.and_time(timestamp.time()).and_utc())
}

/// The same day and time as `timestamp`, moved to January of its year.
pub fn start_of_year(timestamp: DateTime<Utc>) -> Result<DateTime<Utc>> {
    add_months(timestamp, 1 - timestamp.month() as i32)
}

/// Midnight UTC on the first day of the given month.
pub fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .ok_or_else(|| {
            BalanceSheetError::DateError(format!("Invalid month {:04}-{:02}", year, month))
        })
}

/// Renders `timestamp` as `YYYY-MM-DDTHH:MM:SS.000Z`.
///
/// The fractional part is always written as `.000`, whatever the
/// sub-second precision of the timestamp.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}
