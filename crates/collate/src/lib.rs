//! Collation of calibrated yearly series into a multi-year daily table.
//!
//! - [`collate`] sorts years, checks series lengths, repairs the tmin/tmax
//!   diurnal range and emits one [`DailyRecord`] per day.
//! - [`goodness_of_fit`] and [`summarize`] aggregate the per-year error
//!   reports for reporting.

mod error;
mod fit;
mod repair;
mod table;

pub use error::CollateError;
pub use fit::{FitSummary, StatisticSummary, goodness_of_fit, summarize};
pub use repair::{MIN_DIURNAL_RANGE, repair_diurnal_range};
pub use table::{DailyRecord, DailyTable, YearOutputs, collate};
