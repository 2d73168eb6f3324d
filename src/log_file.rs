use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::aggregate::aggregate_lines;
use crate::stats::DailyHits;

pub fn analyze_log_file(path: &Path) -> Result<DailyHits> {
    let start_time = Instant::now();
    info!(action = "start", component = "log_scan", file_path = ?path, "Starting access log scan");

    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let daily = aggregate_lines(BufReader::new(file))
        .with_context(|| format!("Failed to read {:?}", path))?;

    let scan = daily.scan;
    if scan.lines_skipped > 0 {
        warn!(
            action = "skip",
            component = "log_scan",
            lines_skipped = scan.lines_skipped,
            "Dropped unparsable lines"
        );
    }

    info!(
        action = "complete",
        component = "log_scan",
        lines_read = scan.lines_read,
        hits_recorded = scan.hits_recorded,
        day_count = daily.dates.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Access log scan completed"
    );
    Ok(daily)
}
