use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "daily-hits",
    about = "Rank URLs by hit count for each UTC day of an access log",
    version,
    long_about = None
)]
pub struct Args {
    /// Access log with one `<epoch_seconds>|<url>` record per line
    pub input: PathBuf,

    /// Number of top URLs to display per day
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
