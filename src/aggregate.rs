use anyhow::Result;
use std::collections::HashMap;
use std::io::BufRead;

use crate::date_key::DateKey;
use crate::parser::parse_line;
use crate::stats::{DailyHits, ScanStats, UrlCounts};

/// Per-day URL counters built up while scanning a log.
///
/// Dates are kept in first-seen order and sorted once by [`HitTable::finish`].
#[derive(Debug, Default)]
pub struct HitTable {
    days: HashMap<DateKey, UrlCounts>,
    dates: Vec<DateKey>,
    scan: ScanStats,
}

impl HitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw line (without its newline). Returns `false` when the
    /// line was skipped as unparsable.
    pub fn record_line(&mut self, line: &[u8]) -> bool {
        self.scan.lines_read += 1;
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        let Some((date, url)) = std::str::from_utf8(line)
            .ok()
            .and_then(parse_line)
            .and_then(|event| Some((event.date_key()?, event.url)))
        else {
            self.scan.lines_skipped += 1;
            return false;
        };

        self.record_hit(date, url);
        true
    }

    pub fn record_hit(&mut self, date: DateKey, url: &str) {
        let bucket = self.days.entry(date).or_insert_with(|| {
            self.dates.push(date);
            UrlCounts::new()
        });
        match bucket.get_mut(url) {
            Some(hits) => *hits += 1,
            None => {
                bucket.insert(url.to_string(), 1);
            }
        }
        self.scan.hits_recorded += 1;
    }

    pub fn finish(mut self) -> DailyHits {
        self.dates.sort_unstable();
        DailyHits {
            days: self.days,
            dates: self.dates,
            scan: self.scan,
        }
    }
}

/// Reads every line from `reader` into a [`HitTable`]. Only read failures
/// are errors; malformed lines are dropped.
pub fn aggregate_lines<R: BufRead>(reader: R) -> Result<DailyHits> {
    let mut table = HitTable::new();
    for line in reader.split(b'\n') {
        table.record_line(&line?);
    }
    Ok(table.finish())
}
