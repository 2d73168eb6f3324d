//! A UTC calendar day packed into a `u32` as `yyyymmdd`.
//!
//! The encoding is fixed width and zero padded, so ordering the raw integers
//! orders the days chronologically. Only years 1000 through 9999 are
//! encodable; anything else would not render as exactly eight digits.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate};

const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(u32);

impl DateKey {
    /// Key for the UTC day containing `secs` seconds since the Unix epoch.
    /// Returns `None` when the instant cannot be represented as an 8-digit key.
    pub fn from_epoch_secs(secs: i64) -> Option<Self> {
        let instant = DateTime::from_timestamp(secs, 0)?;
        Self::from_date(instant.date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Option<Self> {
        let year = date.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        Some(DateKey(year as u32 * 10_000 + date.month() * 100 + date.day()))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Renders the key as `MM/DD/YYYY GMT`.
    pub fn to_display(self) -> Result<String> {
        let digits = self.0.to_string();
        if digits.len() != 8 {
            anyhow::bail!("Invalid date key: {}", digits);
        }
        Ok(format!(
            "{}/{}/{} GMT",
            &digits[4..6],
            &digits[6..],
            &digits[..4]
        ))
    }
}
