//! # Date Helpers
//!
//! Every date that reaches a request goes through [`format_api_date`], so the
//! wire format is always `YYYY-MM-DD` regardless of how the caller obtained it.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::NasaError;

/// Wire format shared by every provider that takes a calendar date.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as `YYYY-MM-DD`.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parses user input into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYYMMDD` and RFC 3339 timestamps
/// (the date part in UTC is kept).
pub fn parse_api_date(input: &str) -> Result<NaiveDate, NasaError> {
    let s = input.trim();
    for fmt in [API_DATE_FORMAT, "%Y/%m/%d", "%Y%m%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| NasaError::InvalidDate(input.to_string()))
}

/// Inclusive span of calendar days used by the feed-style endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days` days leading up to and including `today`.
    ///
    /// `start` is `today - days`, matching what the feed pages request.
    /// Fails with [`NasaError::InvalidDate`] when that falls before the
    /// earliest representable date.
    pub fn ending_on(today: NaiveDate, days: u32) -> Result<Self, NasaError> {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| NasaError::InvalidDate(format!("{} minus {} days", format_api_date(today), days)))?;
        Ok(Self { start, end: today })
    }

    /// Same as [`DateRange::ending_on`] anchored at the current UTC date.
    pub fn last_days(days: u32) -> Result<Self, NasaError> {
        Self::ending_on(Utc::now().date_naive(), days)
    }

    pub fn start_str(&self) -> String {
        format_api_date(self.start)
    }

    pub fn end_str(&self) -> String {
        format_api_date(self.end)
    }
}
