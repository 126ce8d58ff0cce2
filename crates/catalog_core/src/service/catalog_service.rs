//! Catalog read service.
//!
//! # Invariants
//! - Service APIs never bypass repository validation or error mapping.
//! - Service layer remains storage-agnostic.

use crate::model::record::{CatalogRecord, RecordId};
use crate::model::request::ListRequest;
use crate::repo::catalog_repo::{CatalogRepository, CategoryOf, RepoResult};
use serde::Serialize;

/// Response envelope for list calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListResponse<C> {
    pub records: Vec<CatalogRecord<C>>,
}

/// Use-case wrapper around one catalog repository.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Seeds the underlying catalog; safe to call repeatedly.
    pub fn init(&self) -> RepoResult<()> {
        self.repo.init()
    }

    pub fn list_records(
        &self,
        request: &ListRequest<CategoryOf<R>>,
    ) -> RepoResult<ListResponse<CategoryOf<R>>> {
        let records = self.repo.list(request)?;
        Ok(ListResponse { records })
    }

    /// Returns repository-level not-found errors unchanged.
    pub fn get_record(&self, id: RecordId) -> RepoResult<CatalogRecord<CategoryOf<R>>> {
        self.repo.get(id)
    }
}
