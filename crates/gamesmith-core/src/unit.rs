use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Dimension;

/// One generated item, write-once.
///
/// A `Unit` is assembled fully by the generator and never mutated
/// afterwards; downstream stages (persist, promote, report) only read it.
/// The kind, price, and engine always come from the catalog lists of
/// `dimension`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub dimension: Dimension,
    pub kind: String,
    pub price: i64,
    pub engine: String,
    pub created_at: DateTime<Utc>,
    pub repo_url: String,
    pub payment: String,
    pub contact: String,
    pub brand: String,
}
