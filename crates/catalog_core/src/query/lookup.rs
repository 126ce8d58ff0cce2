//! Single-record lookup by id.

use super::{base_query, CatalogQuery};
use crate::catalog::CatalogSchema;
use crate::model::record::RecordId;
use chrono::{DateTime, Utc};
use rusqlite::types::Value;

/// Builds `<base> WHERE id = ?` for `S`.
///
/// Always starts from a fresh base template; it takes no query argument so a
/// filter- or sort-augmented text can never be extended with a second
/// `WHERE`.
pub fn id_lookup_query<S: CatalogSchema>(now: DateTime<Utc>, id: RecordId) -> CatalogQuery {
    let mut query = base_query::<S>(now);
    query.sql.push_str(" WHERE id = ?");
    query.params.push(Value::Integer(id));
    query
}

#[cfg(test)]
mod tests {
    use super::id_lookup_query;
    use crate::catalog::SportsCatalog;
    use chrono::{TimeZone, Utc};
    use rusqlite::types::Value;

    #[test]
    fn lookup_binds_id_after_now() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let query = id_lookup_query::<SportsCatalog>(now, 42);

        assert!(query.sql.ends_with("FROM events WHERE id = ?"));
        assert_eq!(query.sql.matches("WHERE").count(), 1);
        assert_eq!(query.params.len(), 2);
        assert_eq!(query.params[1], Value::Integer(42));
        assert_eq!(query.placeholder_count(), query.params.len());
    }
}
