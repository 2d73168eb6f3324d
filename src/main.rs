use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, BufWriter};
use std::process;

use daily_hits::utils::{setup_logging, validate_args};
use daily_hits::{analyze_log_file, render_report, Args};

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // usage goes to stdout alongside the report
            println!("{}", e.render());
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let daily = analyze_log_file(&args.input)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_report(&daily, args.top, &mut out)
}

fn main() {
    let args = parse_args();
    setup_logging(args.verbose);

    if let Err(e) = validate_args(&args) {
        println!("{}", e);
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
