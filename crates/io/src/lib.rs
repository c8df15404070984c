//! # aeolus-io
//!
//! CSV boundary of the weather generator: monthly target statistics in,
//! daily series and per-statistic fit reports out.

mod daily;
mod error;
mod report;
mod targets;
mod validate;

pub use daily::{write_daily, write_daily_csv};
pub use error::IoError;
pub use report::{ReportRow, report_rows, write_report, write_report_csv};
pub use targets::{PERIOD_NAMES, SiteTargets, read_targets, read_targets_from_reader};
