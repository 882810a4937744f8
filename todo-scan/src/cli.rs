// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::Write as _;
use std::path::PathBuf;

use crate::config::{ReportOptions, ScanConfig, load_config};
use crate::core::scanner::{ScanRoot, scan_root};
use crate::models::ScanSummary;
use crate::report::render;

/// Scan a Rust source tree for TODO/FIXME/NOTE/HACK comments and group them
/// by the plans.md of the nearest crate.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root of the source tree to scan
    pub root: PathBuf,

    /// Output JSON instead of a markdown table
    #[arg(long)]
    pub json: bool,

    /// Group findings by owning plans.md file
    #[arg(long)]
    pub group: bool,

    /// Configuration file to use instead of searching for .todo-scan.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    #[must_use]
    pub const fn report_options(&self) -> ReportOptions {
        ReportOptions {
            json: self.json,
            group: self.group,
        }
    }
}

/// Sets up stderr logging. Only the flags decide the level.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);

    // A logger may already be installed when running under a test harness.
    let _ = builder.try_init();
}

/// Runs one scan and writes the report to stdout and the summary to stderr.
///
/// # Errors
///
/// This function may return an error if:
/// * The root path does not exist
/// * A configuration file cannot be read or parsed
/// * The report cannot be serialized
pub fn run(args: Args) -> Result<()> {
    let root = ScanRoot::resolve(&args.root)?;

    let config = match &args.config {
        Some(path) => ScanConfig::from_file(path)?,
        None => load_config(root.dir())?,
    };

    let findings = scan_root(&root, &config)
        .with_context(|| format!("Failed to scan directory: {}", args.root.display()))?;

    let report = render(&findings, args.report_options())?;
    println!("{report}");

    eprintln!("\n{}", ScanSummary::from_findings(&findings));

    Ok(())
}
