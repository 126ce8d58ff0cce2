//! `ORDER BY` assembly with allow-list column validation.
//!
//! Identifiers cannot be bound as parameters, so the character-class check
//! in [`is_valid_column`] is the only thing standing between caller text and
//! the SQL string.

use super::CatalogQuery;
use crate::catalog::CatalogSchema;
use crate::model::request::SortSpec;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static SORT_COLUMN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid sort column regex"));

/// Rejected request shape; the query is never executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A required request field was empty.
    MalformedRequest { field: &'static str },
    /// Sort column contains characters outside `[A-Za-z0-9_]`.
    InvalidColumn(String),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRequest { field } => write_missing_field(f, field),
            Self::InvalidColumn(column) => write_invalid_column(f, column),
        }
    }
}

pub(crate) fn write_missing_field(f: &mut Formatter<'_>, field: &str) -> std::fmt::Result {
    write!(f, "a sort request object is missing the `{field}` value")
}

pub(crate) fn write_invalid_column(f: &mut Formatter<'_>, column: &str) -> std::fmt::Result {
    write!(f, "{column:?} is not a valid column name")
}

impl Error for QueryError {}

/// Returns whether `column` is safe to splice into SQL text.
pub fn is_valid_column(column: &str) -> bool {
    SORT_COLUMN_RE.is_match(column)
}

/// Appends `ORDER BY` for `sort`, or for `S::START_COLUMN ASC` when empty.
///
/// # Errors
/// - `MalformedRequest` for an empty column.
/// - `InvalidColumn` for any column failing [`is_valid_column`].
///
/// On error the partially built text is dropped with `query`.
pub fn apply_order_by<S: CatalogSchema>(
    mut query: CatalogQuery,
    sort: &[SortSpec],
) -> Result<CatalogQuery, QueryError> {
    let default_sort;
    let sort = if sort.is_empty() {
        default_sort = [SortSpec::ascending(S::START_COLUMN)];
        &default_sort[..]
    } else {
        sort
    };

    let mut clauses = Vec::with_capacity(sort.len());
    for spec in sort {
        if spec.column.is_empty() {
            return Err(QueryError::MalformedRequest { field: "column" });
        }
        if !is_valid_column(&spec.column) {
            return Err(QueryError::InvalidColumn(spec.column.clone()));
        }

        let direction = if spec.descending { "DESC" } else { "ASC" };
        clauses.push(format!("{} {direction}", spec.column));
    }

    query.sql.push_str(" ORDER BY ");
    query.sql.push_str(&clauses.join(", "));
    Ok(query)
}
