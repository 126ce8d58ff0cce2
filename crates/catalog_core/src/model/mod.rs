//! Read-side domain model shared by the race and sports catalogs.
//!
//! # Responsibility
//! - Define the typed projection every catalog row is decoded into.
//! - Define the structured list request (filter + multi-key sort).
//!
//! # Invariants
//! - Records are transient projections rebuilt per query; nothing here is
//!   cached between calls.
//! - `status` is derived at query time and never persisted.

pub mod record;
pub mod request;
