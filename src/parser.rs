use crate::date_key::DateKey;

pub const FIELD_DELIMITER: char = '|';

/// One `<epoch_seconds>|<url>` line split into its two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent<'a> {
    pub timestamp: &'a str,
    pub url: &'a str,
}

impl RawEvent<'_> {
    /// Day bucket for this event, or `None` if the timestamp is not a
    /// base-10 `i64` or lies outside the encodable date range.
    pub fn date_key(&self) -> Option<DateKey> {
        let secs: i64 = self.timestamp.parse().ok()?;
        DateKey::from_epoch_secs(secs)
    }
}

/// Splits a line into exactly two fields. Anything else is not an event.
pub fn parse_line(line: &str) -> Option<RawEvent<'_>> {
    let mut fields = line.split(FIELD_DELIMITER);
    let timestamp = fields.next()?;
    let url = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some(RawEvent { timestamp, url })
}
