// src/main.rs
use anyhow::Result;
use clap::Parser as _;

use todo_scan::cli::{Args, init_logger, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose, args.quiet);
    run(args)
}
