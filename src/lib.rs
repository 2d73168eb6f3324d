pub mod aggregate;
pub mod args;
pub mod date_key;
pub mod log_file;
pub mod parser;
pub mod report;
pub mod stats;
pub mod utils;

pub use aggregate::{aggregate_lines, HitTable};
pub use args::Args;
pub use date_key::DateKey;
pub use log_file::analyze_log_file;
pub use report::{rank_urls, render_report};
pub use stats::{DailyHits, ScanStats, UrlCounts, UrlHit};
