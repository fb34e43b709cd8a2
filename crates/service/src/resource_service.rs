use std::sync::Arc;

use models::{RecordId, Resource};
use tracing::{info, instrument, warn};

use crate::{errors::ServiceError, pagination::ListParams, repository::ResourceRepository};

/// Lifecycle operations for one resource.
///
/// Identifiers arrive as raw strings and are validated before the repository is
/// touched. Create and update re-read the record after writing, so callers see
/// persisted state; the two round-trips are not atomic.
pub struct ResourceService<R: Resource> {
    repo: Arc<dyn ResourceRepository<R>>,
    max_limit: Option<u64>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(repo: Arc<dyn ResourceRepository<R>>) -> Self {
        Self { repo, max_limit: None }
    }

    /// Cap list page sizes. `None` leaves `limit` unbounded.
    pub fn with_max_limit(mut self, max_limit: Option<u64>) -> Self {
        self.max_limit = max_limit;
        self
    }

    fn parse_id(raw: &str) -> Result<RecordId, ServiceError> {
        RecordId::parse(raw).map_err(|_| {
            warn!(resource = R::COLLECTION, id = %raw, "rejected malformed identifier");
            ServiceError::invalid_id::<R>()
        })
    }

    #[instrument(skip_all, fields(resource = R::COLLECTION))]
    pub async fn create(&self, input: R::Create) -> Result<R, ServiceError> {
        let fields: R::Base = input.into();
        let id = self.repo.insert(&fields).await?;
        let created = self.repo.find(&id).await?.ok_or_else(ServiceError::not_found::<R>)?;
        info!(%id, "created");
        Ok(created)
    }

    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn list(&self, params: ListParams) -> Result<Vec<R>, ServiceError> {
        let window = params.normalize(self.max_limit);
        let items = self.repo.list(window).await?;
        info!(count = items.len(), "listed");
        Ok(items)
    }

    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn get(&self, raw_id: &str) -> Result<R, ServiceError> {
        let id = Self::parse_id(raw_id)?;
        self.repo.find(&id).await?.ok_or_else(ServiceError::not_found::<R>)
    }

    /// Full-field overwrite. A zero match count is "not found"; nothing is inserted.
    #[instrument(skip(self, input), fields(resource = R::COLLECTION))]
    pub async fn update(&self, raw_id: &str, input: R::Create) -> Result<R, ServiceError> {
        let id = Self::parse_id(raw_id)?;
        let fields: R::Base = input.into();
        if self.repo.replace_fields(&id, &fields).await? == 0 {
            return Err(ServiceError::not_found::<R>());
        }
        let updated = self.repo.find(&id).await?.ok_or_else(ServiceError::not_found::<R>)?;
        info!(%id, "updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn delete(&self, raw_id: &str) -> Result<(), ServiceError> {
        let id = Self::parse_id(raw_id)?;
        if self.repo.delete(&id).await? == 0 {
            return Err(ServiceError::not_found::<R>());
        }
        info!(%id, "deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryRepository;
    use models::{Product, ProductBase, ProductCreate, User, UserCreate};

    fn service() -> (ResourceService<Product>, InMemoryRepository<Product>) {
        let repo = InMemoryRepository::<Product>::new();
        (ResourceService::new(Arc::new(repo.clone())), repo)
    }

    fn widget() -> ProductCreate {
        ProductCreate { name: "Widget".into(), price: 9.99 }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() -> Result<(), anyhow::Error> {
        let (svc, _) = service();
        let created = svc.create(widget()).await?;
        assert_eq!(created.id.as_str().len(), RecordId::LEN);

        let fetched = svc.get(created.id.as_str()).await?;
        assert_eq!(fetched, created);
        assert_eq!(fetched.base(), ProductBase::from(widget()));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_id_is_rejected_with_resource_name() {
        let svc = ResourceService::<User>::new(Arc::new(InMemoryRepository::<User>::new()));
        let err = svc.get("not-a-valid-id").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidId(_)));
        assert_eq!(err.to_string(), "Invalid user ID format");

        let err = svc
            .update("123", UserCreate { username: "a".into(), email: "b".into() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid user ID format");
        assert!(matches!(svc.delete("zz").await, Err(ServiceError::InvalidId(_))));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> Result<(), anyhow::Error> {
        let (svc, _) = service();
        let created = svc.create(widget()).await?;
        svc.delete(created.id.as_str()).await?;

        let err = svc.get(created.id.as_str()).await.unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
        assert!(matches!(svc.delete(created.id.as_str()).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_record_does_not_insert() -> Result<(), anyhow::Error> {
        let (svc, repo) = service();
        svc.create(widget()).await?;
        let before = repo.len().await;

        let err = svc.update("65a1b2c3d4e5f60718293a4b", widget()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(repo.len().await, before);
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() -> Result<(), anyhow::Error> {
        let (svc, _) = service();
        let created = svc.create(widget()).await?;
        let updated = svc
            .update(created.id.as_str(), ProductCreate { name: "Gadget".into(), price: 1.0 })
            .await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Gadget");
        assert_eq!(svc.get(created.id.as_str()).await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn list_past_end_is_empty() -> Result<(), anyhow::Error> {
        let (svc, _) = service();
        for _ in 0..3 {
            svc.create(widget()).await?;
        }
        assert!(svc.list(ListParams::new(3, 10)).await?.is_empty());
        assert!(svc.list(ListParams::new(50, 10)).await?.is_empty());
        assert_eq!(svc.list(ListParams::default()).await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn list_honours_configured_ceiling() -> Result<(), anyhow::Error> {
        let repo = InMemoryRepository::<Product>::new();
        let svc = ResourceService::<Product>::new(Arc::new(repo)).with_max_limit(Some(2));
        for _ in 0..5 {
            svc.create(widget()).await?;
        }
        assert_eq!(svc.list(ListParams::new(0, 100)).await?.len(), 2);
        assert_eq!(svc.list(ListParams::new(0, 0)).await?.len(), 2);
        Ok(())
    }
}
