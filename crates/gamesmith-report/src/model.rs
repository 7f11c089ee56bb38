use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gamesmith_core::Unit;

/// Aggregate report over one batch, serialized once and then discarded.
///
/// The identity and schedule configuration is echoed here so a report file
/// is traceable on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub public_handle: String,
    pub contact_email: String,
    pub brand: String,
    pub version: String,
    pub units_created: u64,
    pub total_value: i64,
    pub units_2d: u64,
    pub units_3d: u64,
    pub units: Vec<Unit>,
    pub target_end_date: String,
}
