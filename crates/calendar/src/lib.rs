//! # aeolus-calendar
//!
//! Gregorian calendar arithmetic for daily weather synthesis.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"month_lengths()"| B["[u8; 12]"]
//!     B -->|"partition_by_month()"| C["12 monthly slices"]
//!     A -->|"year_dates()"| D["Vec of Date"]
//!     D -->|".next()"| D
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use aeolus_calendar::{days_in_year, partition_by_month};
//!
//! assert_eq!(days_in_year(2024), 366);
//!
//! let series = vec![0.0; 365];
//! let months = partition_by_month(&series, 2023).unwrap();
//! assert_eq!(months[1].len(), 28);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Leap-year rule, month lengths, month partitioning |
//! | `date` | Gregorian date with day-of-year |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod sequence;

pub use date::Date;
pub use error::CalendarError;
pub use month::{
    annual_and_monthly, days_in_month, days_in_year, is_leap_year, month_lengths,
    partition_by_month,
};
pub use sequence::{date_sequence, year_dates};
