//! Record selection and output.
//!
//! - [`filter`] - author selection and date-range filtering
//! - [`output`] - JSON and CSV writers

pub mod filter;
pub mod output;

pub use filter::{FilterConfig, OVERALL, UserFilter, apply_filters};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
pub use output::{to_json, write_json};
