// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod report;
pub mod utils;

pub use cli::{Args, run};
pub use config::{CONFIG_FILE_NAME, ReportOptions, ScanConfig, load_config};
pub use crate::core::ignore::Patterns;
pub use crate::core::scanner::markers::MarkerPatterns;
pub use crate::core::scanner::owner::resolve_owner;
pub use crate::core::scanner::{ScanRoot, scan_directory, scan_root};
pub use models::{Finding, Marker, ScanSummary};
pub use report::{group_by_owner, render};
