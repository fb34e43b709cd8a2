use std::sync::Arc;

use async_trait::async_trait;
use models::{RecordId, Resource};
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::ResourceRepository;
use crate::{errors::ServiceError, pagination::ListParams};

/// Process-local repository holding records in insertion order.
///
/// Lookups are linear scans; meant for tests and local runs, not volume.
pub struct InMemoryRepository<R: Resource> {
    records: Arc<RwLock<Vec<(RecordId, R::Base)>>>,
}

impl<R: Resource> Clone for InMemoryRepository<R> {
    fn clone(&self) -> Self {
        Self { records: Arc::clone(&self.records) }
    }
}

impl<R: Resource> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self { records: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<R: Resource> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for InMemoryRepository<R> {
    async fn insert(&self, fields: &R::Base) -> Result<RecordId, ServiceError> {
        let id = RecordId::from(ObjectId::new());
        self.records.write().await.push((id.clone(), fields.clone()));
        Ok(id)
    }

    async fn find(&self, id: &RecordId) -> Result<Option<R>, ServiceError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|(stored, _)| stored == id)
            .map(|(_, base)| R::from_stored(id.clone(), base.clone())))
    }

    async fn list(&self, params: ListParams) -> Result<Vec<R>, ServiceError> {
        let records = self.records.read().await;
        let skip = usize::try_from(params.skip).unwrap_or(usize::MAX);
        let take = match params.limit {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };
        Ok(records
            .iter()
            .skip(skip)
            .take(take)
            .map(|(id, base)| R::from_stored(id.clone(), base.clone()))
            .collect())
    }

    async fn replace_fields(&self, id: &RecordId, fields: &R::Base) -> Result<u64, ServiceError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|(stored, _)| stored == id) {
            Some((_, slot)) => {
                *slot = fields.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &RecordId) -> Result<u64, ServiceError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|(stored, _)| stored != id);
        Ok((before - records.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Product, ProductBase};

    fn widget(n: u32) -> ProductBase {
        ProductBase { name: format!("widget-{n}"), price: f64::from(n) }
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() -> Result<(), anyhow::Error> {
        let repo = InMemoryRepository::<Product>::new();
        for n in 0..5 {
            repo.insert(&widget(n)).await?;
        }
        let names: Vec<String> = repo
            .list(ListParams::new(1, 3))
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["widget-1", "widget-2", "widget-3"]);
        assert_eq!(repo.list(ListParams::new(0, 0)).await?.len(), 5);
        assert!(repo.list(ListParams::new(5, 10)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn replace_and_delete_report_counts() -> Result<(), anyhow::Error> {
        let repo = InMemoryRepository::<Product>::new();
        let id = repo.insert(&widget(1)).await?;
        let missing = RecordId::from(ObjectId::new());

        assert_eq!(repo.replace_fields(&id, &widget(2)).await?, 1);
        assert_eq!(repo.replace_fields(&missing, &widget(2)).await?, 0);
        assert_eq!(repo.find(&id).await?.map(|p| p.name), Some("widget-2".to_string()));

        assert_eq!(repo.delete(&id).await?, 1);
        assert_eq!(repo.delete(&id).await?, 0);
        assert!(repo.is_empty().await);
        Ok(())
    }
}
