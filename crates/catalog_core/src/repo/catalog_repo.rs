//! Catalog repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Expose `init`, `list` and `get` over one catalog table.
//! - Keep SQL assembly and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - `list` runs filter then order-by; any builder failure aborts before the
//!   store is touched.
//! - `get` builds from the pristine base template only.
//! - `init` seeds at most once per repository instance; every caller sees
//!   the same published outcome.

use crate::catalog::{CatalogSchema, RaceCatalog, SportsCatalog};
use crate::clock::{Clock, SystemClock};
use crate::db::DbError;
use crate::model::record::{CatalogRecord, RecordId};
use crate::model::request::ListRequest;
use crate::query::{
    apply_filter, apply_order_by, base_query, id_lookup_query, CatalogQuery, QueryError,
};
use crate::query::sort::{write_invalid_column, write_missing_field};
use crate::repo::row::map_row;
use log::{debug, error, info, warn};
use once_cell::sync::OnceCell;
use rusqlite::{params_from_iter, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::sync::Mutex;
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog queries and seeding.
#[derive(Debug)]
pub enum RepoError {
    /// A required request field was empty.
    MalformedRequest { field: &'static str },
    /// Sort column failed allow-list validation.
    InvalidColumn(String),
    /// `get` matched no row.
    NotFound { catalog: &'static str, id: RecordId },
    Db(DbError),
    /// A stored row could not be decoded.
    InvalidData(String),
    /// Published outcome of a failed `init`.
    Seed(String),
}

impl RepoError {
    /// Stable short code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedRequest { .. } => "malformed_request",
            Self::InvalidColumn(_) => "invalid_column",
            Self::NotFound { .. } => "not_found",
            Self::Db(_) => "db_error",
            Self::InvalidData(_) => "invalid_data",
            Self::Seed(_) => "seed_failed",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRequest { field } => write_missing_field(f, field),
            Self::InvalidColumn(column) => write_invalid_column(f, column),
            Self::NotFound { catalog, id } => {
                write!(f, "a {catalog} with id \"{id}\" does not exist")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
            Self::Seed(message) => write!(f, "catalog seeding failed: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<QueryError> for RepoError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::MalformedRequest { field } => Self::MalformedRequest { field },
            QueryError::InvalidColumn(column) => Self::InvalidColumn(column),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Category key type of a repository's catalog.
pub type CategoryOf<R> = <<R as CatalogRepository>::Schema as CatalogSchema>::Category;

/// Read interface for one catalog.
pub trait CatalogRepository {
    type Schema: CatalogSchema;

    /// Seeds demo rows once per repository instance.
    fn init(&self) -> RepoResult<()>;
    /// Lists records matching `request`, in requested (or default) order.
    fn list(
        &self,
        request: &ListRequest<<Self::Schema as CatalogSchema>::Category>,
    ) -> RepoResult<Vec<CatalogRecord<<Self::Schema as CatalogSchema>::Category>>>;
    /// Gets one record by id, or `NotFound`.
    fn get(
        &self,
        id: RecordId,
    ) -> RepoResult<CatalogRecord<<Self::Schema as CatalogSchema>::Category>>;
}

/// SQLite-backed catalog repository.
///
/// Borrows a shared connection; the mutex is the store's serialisation
/// point; every call builds its own query from scratch.
pub struct SqliteCatalogRepository<'conn, S: CatalogSchema> {
    conn: &'conn Mutex<Connection>,
    clock: Box<dyn Clock>,
    seeded: OnceCell<Result<(), String>>,
    _schema: PhantomData<fn() -> S>,
}

/// Race catalog over the `races` table.
pub type RaceRepository<'conn> = SqliteCatalogRepository<'conn, RaceCatalog>;

/// Sports catalog over the `events` table.
pub type SportsRepository<'conn> = SqliteCatalogRepository<'conn, SportsCatalog>;

impl<'conn, S: CatalogSchema> SqliteCatalogRepository<'conn, S> {
    /// Creates a repository evaluating status against the wall clock.
    pub fn new(conn: &'conn Mutex<Connection>) -> Self {
        Self::with_clock(conn, SystemClock)
    }

    /// Creates a repository evaluating status against `clock`.
    pub fn with_clock(conn: &'conn Mutex<Connection>, clock: impl Clock + 'static) -> Self {
        Self {
            conn,
            clock: Box::new(clock),
            seeded: OnceCell::new(),
            _schema: PhantomData,
        }
    }

    fn build_list_query(&self, request: &ListRequest<S::Category>) -> RepoResult<CatalogQuery> {
        let query = base_query::<S>(self.clock.now());
        let query = apply_filter::<S>(query, request.filter.as_ref());
        Ok(apply_order_by::<S>(query, &request.sort)?)
    }

    fn fetch(&self, query: &CatalogQuery) -> RepoResult<Vec<CatalogRecord<S::Category>>> {
        let conn = self.conn.lock().map_err(|_| DbError::LockPoisoned)?;
        let mut stmt = conn.prepare(&query.sql)?;
        let mut rows = stmt.query(params_from_iter(query.params.iter()))?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(map_row::<S>(row)?);
        }

        Ok(records)
    }

    fn run_seed(&self) -> Result<(), String> {
        let started_at = Instant::now();
        info!(
            "event=catalog_seed module=repo status=start catalog={}",
            S::TABLE
        );

        let outcome = self
            .conn
            .lock()
            .map_err(|_| RepoError::from(DbError::LockPoisoned))
            .and_then(|conn| S::seed(&conn, self.clock.now()).map_err(RepoError::from));

        match outcome {
            Ok(()) => {
                info!(
                    "event=catalog_seed module=repo status=ok catalog={} duration_ms={}",
                    S::TABLE,
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=catalog_seed module=repo status=error catalog={} duration_ms={} error_code={} error={}",
                    S::TABLE,
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err.to_string())
            }
        }
    }
}

impl<S: CatalogSchema> CatalogRepository for SqliteCatalogRepository<'_, S> {
    type Schema = S;

    fn init(&self) -> RepoResult<()> {
        self.seeded
            .get_or_init(|| self.run_seed())
            .clone()
            .map_err(RepoError::Seed)
    }

    fn list(
        &self,
        request: &ListRequest<S::Category>,
    ) -> RepoResult<Vec<CatalogRecord<S::Category>>> {
        let started_at = Instant::now();
        let result = self
            .build_list_query(request)
            .and_then(|query| self.fetch(&query));

        match &result {
            Ok(records) => debug!(
                "event=catalog_list module=repo status=ok catalog={} rows={} duration_ms={}",
                S::TABLE,
                records.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=catalog_list module=repo status=error catalog={} duration_ms={} error_code={} error={}",
                S::TABLE,
                started_at.elapsed().as_millis(),
                err.code(),
                err
            ),
        }

        result
    }

    fn get(&self, id: RecordId) -> RepoResult<CatalogRecord<S::Category>> {
        let started_at = Instant::now();
        let query = id_lookup_query::<S>(self.clock.now(), id);
        let result = self.fetch(&query).and_then(|records| {
            records.into_iter().next().ok_or(RepoError::NotFound {
                catalog: S::NAME,
                id,
            })
        });

        match &result {
            Ok(_) => debug!(
                "event=catalog_get module=repo status=ok catalog={} id={id} duration_ms={}",
                S::TABLE,
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=catalog_get module=repo status=error catalog={} id={id} duration_ms={} error_code={} error={}",
                S::TABLE,
                started_at.elapsed().as_millis(),
                err.code(),
                err
            ),
        }

        result
    }
}
