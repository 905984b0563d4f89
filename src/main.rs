//! ascheck - classify ASN values as bogon, unallocated, or allocated.
//!
//! This is the command-line interface for the ascheck library.

#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use ascheck::{AsnClassifier, AsnStatus, RangeTable};
use clap::Parser;
use std::path::PathBuf;

/// Get the version string for ascheck
fn get_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(env!("CARGO_PKG_VERSION"), "-UNRELEASED")
    } else {
        env!("CARGO_PKG_VERSION")
    }
}

/// Command-line arguments for the classifier tool.
#[derive(Parser, Debug)]
#[clap(
    author,
    version = get_version(),
    about = "Classify ASN values as bogon, unallocated, or allocated",
    long_about = None
)]
struct Args {
    /// ASN values to classify (decimal, an "AS" prefix is accepted)
    #[clap(required = true)]
    asns: Vec<String>,

    /// JSON file with an unallocated-range table replacing the bundled one
    #[clap(long, value_name = "FILE")]
    ranges: Option<PathBuf>,

    /// Output results in JSON format
    #[clap(long)]
    json: bool,
}

/// JSON output structure for a single classified ASN
#[derive(Debug, serde::Serialize)]
struct JsonAsn {
    asn: u32,
    status: AsnStatus,
    bogon: bool,
    unallocated: bool,
}

/// Parse a command-line ASN argument, tolerating an "AS" prefix
fn parse_asn_arg(arg: &str) -> Result<u32> {
    let digits = arg
        .strip_prefix("AS")
        .or_else(|| arg.strip_prefix("as"))
        .unwrap_or(arg);
    digits
        .parse::<u32>()
        .with_context(|| format!("invalid ASN: {}", arg))
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let classifier = match &args.ranges {
        Some(path) => AsnClassifier::with_table(RangeTable::load_json(path)?),
        None => AsnClassifier::new(),
    };

    let asns = args
        .asns
        .iter()
        .map(|arg| parse_asn_arg(arg))
        .collect::<Result<Vec<u32>>>()?;

    if args.json {
        let output: Vec<JsonAsn> = asns
            .iter()
            .map(|&asn| JsonAsn {
                asn,
                status: classifier.classify(asn),
                bogon: classifier.bogon.is_bogon(asn),
                unallocated: classifier.unallocated.is_unallocated(asn),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for &asn in &asns {
            println!("AS{:<11} {}", asn, classifier.classify(asn));
        }
    }

    Ok(())
}
