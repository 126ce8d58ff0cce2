//! Base select text per catalog.

use super::CatalogQuery;
use crate::catalog::CatalogSchema;
use crate::clock::format_timestamp;
use chrono::{DateTime, Utc};
use rusqlite::types::Value;

/// Returns the base select for `S`, with `now` bound as the first parameter.
///
/// Column order is fixed: `id, <category>, name, number, visible, <start>,
/// status`. The row mapper decodes positionally against it.
pub fn base_query<S: CatalogSchema>(now: DateTime<Utc>) -> CatalogQuery {
    let sql = format!(
        "SELECT
    id,
    {category},
    name,
    number,
    visible,
    {start},
    CASE
        WHEN {start} < ? THEN 'CLOSED'
        ELSE 'OPEN'
    END AS status
FROM {table}",
        category = S::CATEGORY_COLUMN,
        start = S::START_COLUMN,
        table = S::TABLE,
    );

    CatalogQuery {
        sql,
        params: vec![Value::Text(format_timestamp(now))],
    }
}

#[cfg(test)]
mod tests {
    use super::base_query;
    use crate::catalog::{RaceCatalog, SportsCatalog};
    use chrono::{TimeZone, Utc};
    use rusqlite::types::Value;

    #[test]
    fn base_query_binds_now_instead_of_embedding_it() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let query = base_query::<RaceCatalog>(now);

        assert!(!query.sql.contains("2026"));
        assert_eq!(
            query.params,
            vec![Value::Text("2026-10-19T12:00:00Z".to_string())]
        );
        assert_eq!(query.placeholder_count(), 1);
    }

    #[test]
    fn base_query_selects_catalog_specific_columns() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();

        let races = base_query::<RaceCatalog>(now).sql;
        assert!(races.contains("meeting_id"));
        assert!(races.trim_end().ends_with("FROM races"));

        let events = base_query::<SportsCatalog>(now).sql;
        assert!(events.contains("sport,"));
        assert!(events.trim_end().ends_with("FROM events"));
    }
}
