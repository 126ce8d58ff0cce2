//! Read-only race and sports catalogs over SQLite.
//!
//! Turns structured list/get requests into parameterized queries and decodes
//! rows into typed records with a status derived from the start time.

pub mod catalog;
pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use catalog::{CatalogSchema, RaceCatalog, SportsCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{CatalogRecord, MeetingId, Race, RecordId, RecordStatus, SportsEvent};
pub use model::request::{Filter, ListRequest, SortSpec};
pub use repo::catalog_repo::{
    CatalogRepository, CategoryOf, RaceRepository, RepoError, RepoResult, SportsRepository,
    SqliteCatalogRepository,
};
pub use service::catalog_service::{CatalogService, ListResponse};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
