//! Parameterized query assembly for catalog reads.
//!
//! # Responsibility
//! - Build the base select text with a time-derived `status` column.
//! - Append filter, order-by and id-lookup clauses without interpolating
//!   caller values into SQL text.
//!
//! # Invariants
//! - Every caller-originated value travels in `CatalogQuery::params`.
//! - The only caller text spliced into SQL is `ORDER BY` column names, and
//!   only after allow-list validation in [`sort`].
//! - Placeholders are anonymous `?`; `params` order equals placeholder order.

use rusqlite::types::Value;

pub mod filter;
pub mod lookup;
pub mod sort;
pub mod template;

pub use filter::apply_filter;
pub use lookup::id_lookup_query;
pub use sort::{apply_order_by, is_valid_column, QueryError};
pub use template::base_query;

/// SQL text plus the values bound to its placeholders, in order.
///
/// Built fresh for every call; never shared between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl CatalogQuery {
    /// Number of `?` placeholders in `sql`.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}
