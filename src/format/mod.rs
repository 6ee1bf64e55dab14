//! Formatters that render numbers and dates as en-US display strings.
//!
//! ## Main Parts
//!
//! - [`format_currency`] - US-dollar amounts (`$1,234.50`)
//! - [`format_date`] / [`format_datetime`] - long dates (`March 9, 2026`)
//! - [`format_file_size`] - byte counts scaled to B/KB/MB/GB/TB (`1.5 KB`)

pub mod currency;
pub mod date;
pub mod size;

pub use currency::format_currency;
pub use date::{format_date, format_datetime, parse_date};
pub use size::{SizeUnit, format_file_size};
