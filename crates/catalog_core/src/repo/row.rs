//! Positional row decoding into [`CatalogRecord`].

use crate::catalog::CatalogSchema;
use crate::clock::{format_timestamp, parse_timestamp};
use crate::model::record::{CatalogRecord, RecordId, RecordStatus};
use crate::repo::catalog_repo::{RepoError, RepoResult};
use rusqlite::Row;

const COL_ID: usize = 0;
const COL_CATEGORY: usize = 1;
const COL_NAME: usize = 2;
const COL_NUMBER: usize = 3;
const COL_VISIBLE: usize = 4;
const COL_START: usize = 5;
const COL_STATUS: usize = 6;

/// Decodes one row of the base select into a record.
///
/// Rejects invalid persisted state instead of masking it.
pub(crate) fn map_row<S: CatalogSchema>(
    row: &Row<'_>,
) -> RepoResult<CatalogRecord<S::Category>> {
    let id: RecordId = row.get(COL_ID)?;

    let visible = match row.get::<_, i64>(COL_VISIBLE)? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid visible value `{other}` in {}.visible for id {id}",
                S::TABLE
            )));
        }
    };

    let start_text: String = row.get(COL_START)?;
    let advertised_start_time = parse_timestamp(&start_text).map_err(|err| {
        RepoError::InvalidData(format!(
            "invalid timestamp `{start_text}` in {}.{} for id {id}: {err}",
            S::TABLE,
            S::START_COLUMN
        ))
    })?;
    // Status and start-time ordering compare this text lexically in SQL.
    let canonical = format_timestamp(advertised_start_time);
    if canonical != start_text {
        return Err(RepoError::InvalidData(format!(
            "non-canonical timestamp `{start_text}` in {}.{} for id {id}; expected `{canonical}`",
            S::TABLE,
            S::START_COLUMN
        )));
    }

    let status_text: String = row.get(COL_STATUS)?;
    let status = RecordStatus::from_db_str(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` for id {id}"))
    })?;

    Ok(CatalogRecord {
        id,
        category: row.get(COL_CATEGORY)?,
        name: row.get(COL_NAME)?,
        number: row.get(COL_NUMBER)?,
        visible,
        advertised_start_time,
        status,
    })
}
