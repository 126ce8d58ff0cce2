//! Catalog schema descriptions.
//!
//! # Responsibility
//! - Describe each catalog's table, category column and category key type.
//! - Own per-catalog demo seeding used by repository `init`.
//!
//! # Invariants
//! - Every identifier here is a compile-time constant; none is caller input.
//! - All catalogs share the select-list order
//!   `id, <category>, name, number, visible, <start>, status`.

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, Value};
use rusqlite::Connection;
use std::fmt::Debug;

mod seed;

pub use seed::SEED_ROW_COUNT;

/// Static description of one read-only catalog.
pub trait CatalogSchema {
    /// Category key type bound in filters and decoded from rows.
    type Category: Clone + Debug + Into<Value> + FromSql;

    /// Human label used in error messages.
    const NAME: &'static str;
    /// Backing table.
    const TABLE: &'static str;
    /// Column holding the category key.
    const CATEGORY_COLUMN: &'static str;
    /// Column holding the advertised start time; default sort key.
    const START_COLUMN: &'static str = "advertised_start_time";

    /// Inserts demo rows. Must be safe to run against a partially seeded
    /// table.
    fn seed(conn: &Connection, now: DateTime<Utc>) -> rusqlite::Result<()>;
}

/// Horse/greyhound races grouped by meeting.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaceCatalog;

impl CatalogSchema for RaceCatalog {
    type Category = i64;

    const NAME: &'static str = "race";
    const TABLE: &'static str = "races";
    const CATEGORY_COLUMN: &'static str = "meeting_id";

    fn seed(conn: &Connection, now: DateTime<Utc>) -> rusqlite::Result<()> {
        seed::seed_races(conn, now)
    }
}

/// Sporting events grouped by sport name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SportsCatalog;

impl CatalogSchema for SportsCatalog {
    type Category = String;

    const NAME: &'static str = "sports event";
    const TABLE: &'static str = "events";
    const CATEGORY_COLUMN: &'static str = "sport";

    fn seed(conn: &Connection, now: DateTime<Utc>) -> rusqlite::Result<()> {
        seed::seed_events(conn, now)
    }
}
