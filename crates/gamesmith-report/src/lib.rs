//! Batch aggregation and daily reporting for Gamesmith.
//!
//! Consumes the in-memory batch of units produced by one run and writes a
//! date-stamped structured report plus a human-readable summary. Reports
//! for the same calendar day overwrite each other: last write wins.

pub mod errors;
pub mod model;
pub mod report;

pub use errors::{ReportError, ReportResult};
pub use model::DailyReport;
pub use report::{build_report, render_summary, ReportPaths, Reporter};
