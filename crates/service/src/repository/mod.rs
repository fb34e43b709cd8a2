//! Store seam for resource records.
//!
//! Implementations report raw match/delete counts; deciding what a zero count
//! means is left to [`crate::ResourceService`].

use async_trait::async_trait;
use models::{RecordId, Resource};

use crate::{errors::ServiceError, pagination::ListParams};

pub mod memory;
pub mod mongo;

#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// Insert a new record; the store assigns and returns its identifier.
    async fn insert(&self, fields: &R::Base) -> Result<RecordId, ServiceError>;

    async fn find(&self, id: &RecordId) -> Result<Option<R>, ServiceError>;

    /// Records in natural store order within the `skip`/`limit` window.
    async fn list(&self, params: ListParams) -> Result<Vec<R>, ServiceError>;

    /// Overwrite every base field of the matching record. Returns the match count.
    async fn replace_fields(&self, id: &RecordId, fields: &R::Base) -> Result<u64, ServiceError>;

    /// Returns the number of records removed.
    async fn delete(&self, id: &RecordId) -> Result<u64, ServiceError>;
}
