//! Catalog record model.
//!
//! # Invariants
//! - `id` is unique within one catalog and never changes.
//! - `status` is `Closed` only when `advertised_start_time` is strictly before
//!   the instant the producing query was evaluated at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable row identifier within one catalog.
pub type RecordId = i64;

/// Race meeting grouping key.
pub type MeetingId = i64;

/// Open/closed state derived from the advertised start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    /// Start time is now or in the future.
    Open,
    /// Start time has passed.
    Closed,
}

impl RecordStatus {
    /// Text produced by the status `CASE` expression.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    /// Parses status text produced by the store.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "OPEN" => Some(Self::Open),
            "CLOSED" => Some(Self::Closed),
            _ => None,
        }
    }
}

impl Display for RecordStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_db_str())
    }
}

/// One catalog row projected into a typed record.
///
/// `C` is the catalog's category key: a meeting id for races, a sport name
/// for sports events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord<C> {
    pub id: RecordId,
    pub category: C,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub status: RecordStatus,
}

impl<C> CatalogRecord<C> {
    /// Returns whether the record was open when it was read.
    pub fn is_open(&self) -> bool {
        self.status == RecordStatus::Open
    }
}

/// Race record, grouped by meeting.
pub type Race = CatalogRecord<MeetingId>;

/// Sports event record, grouped by sport name.
pub type SportsEvent = CatalogRecord<String>;
