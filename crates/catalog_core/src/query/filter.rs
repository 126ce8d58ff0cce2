//! `WHERE` clause assembly from a structured [`Filter`].

use super::CatalogQuery;
use crate::catalog::CatalogSchema;
use crate::model::request::Filter;

/// Appends filter clauses to `query`.
///
/// `None`, an empty inclusion list with `only_visible = false`, or any other
/// filter that yields no clause leaves the query untouched.
pub fn apply_filter<S: CatalogSchema>(
    mut query: CatalogQuery,
    filter: Option<&Filter<S::Category>>,
) -> CatalogQuery {
    let Some(filter) = filter else {
        return query;
    };

    let mut clauses: Vec<String> = Vec::new();

    if !filter.category_ids.is_empty() {
        let placeholders = vec!["?"; filter.category_ids.len()].join(", ");
        clauses.push(format!("{} IN ({placeholders})", S::CATEGORY_COLUMN));
        query
            .params
            .extend(filter.category_ids.iter().cloned().map(Into::into));
    }

    if filter.only_visible {
        clauses.push("visible = 1".to_string());
    }

    if !clauses.is_empty() {
        query.sql.push_str(" WHERE ");
        query.sql.push_str(&clauses.join(" AND "));
    }

    query
}
