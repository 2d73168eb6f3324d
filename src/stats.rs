use std::collections::HashMap;

use crate::date_key::DateKey;

/// Hits per URL within a single day.
pub type UrlCounts = HashMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlHit {
    pub url: String,
    pub hits: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: u64,
    pub lines_skipped: u64,
    pub hits_recorded: u64,
}

/// Finished aggregation: day buckets plus their keys in chronological order.
#[derive(Debug, Default)]
pub struct DailyHits {
    pub days: HashMap<DateKey, UrlCounts>,
    pub dates: Vec<DateKey>,
    pub scan: ScanStats,
}

impl DailyHits {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn day(&self, date: DateKey) -> Option<&UrlCounts> {
        self.days.get(&date)
    }
}
