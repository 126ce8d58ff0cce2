//! Repository layer for the read-only catalogs.
//!
//! # Responsibility
//! - Compose query building, execution and row mapping behind `list`/`get`.
//! - Guard one-time demo seeding behind `init`.
//!
//! # Invariants
//! - No write path besides seeding.
//! - Repository APIs return semantic errors (`NotFound`, `InvalidColumn`, ...)
//!   in addition to DB transport errors, and never partial results.

pub mod catalog_repo;
mod row;
