use std::marker::PhantomData;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use models::{db, RecordId, Resource};
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::FindOptions,
    Client, Collection,
};

use super::ResourceRepository;
use crate::{errors::ServiceError, pagination::ListParams};

/// MongoDB-backed repository over `R::DATABASE.R::COLLECTION`.
///
/// The client is shared and internally pooled; cloning the repository is cheap.
pub struct MongoRepository<R> {
    collection: Collection<Document>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for MongoRepository<R> {
    fn clone(&self) -> Self {
        Self { collection: self.collection.clone(), _resource: PhantomData }
    }
}

impl<R: Resource> MongoRepository<R> {
    pub fn new(client: &Client) -> Self {
        Self { collection: db::collection::<R>(client), _resource: PhantomData }
    }
}

fn object_id(id: &RecordId) -> Result<ObjectId, ServiceError> {
    id.to_object_id().map_err(|e| ServiceError::Db(format!("record id {id} is not an ObjectId: {e}")))
}

/// Cursor window for `params`. `None` when `skip` exceeds what the wire protocol
/// can express; no collection holds that many records.
fn find_options(params: ListParams) -> Option<FindOptions> {
    i64::try_from(params.skip).ok()?;
    let mut options = FindOptions::default();
    options.skip = Some(params.skip);
    if params.limit > 0 {
        options.limit = Some(i64::try_from(params.limit).unwrap_or(i64::MAX));
    }
    Some(options)
}

fn encode<B: serde::Serialize>(fields: &B) -> Result<Document, ServiceError> {
    bson::to_document(fields).map_err(|e| ServiceError::Db(format!("encode record: {e}")))
}

fn decode<R: Resource>(mut doc: Document) -> Result<R, ServiceError> {
    let oid = doc
        .get_object_id("_id")
        .map_err(|e| ServiceError::Db(format!("stored record without ObjectId _id: {e}")))?;
    doc.remove("_id");
    let base: R::Base = bson::from_document(doc)
        .map_err(|e| ServiceError::Db(format!("decode record {oid}: {e}")))?;
    Ok(R::from_stored(RecordId::from(oid), base))
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for MongoRepository<R> {
    async fn insert(&self, fields: &R::Base) -> Result<RecordId, ServiceError> {
        let result = self.collection.insert_one(encode(fields)?, None).await?;
        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ServiceError::Db("store returned a non-ObjectId identifier".into()))?;
        Ok(RecordId::from(oid))
    }

    async fn find(&self, id: &RecordId) -> Result<Option<R>, ServiceError> {
        let filter = doc! { "_id": object_id(id)? };
        self.collection
            .find_one(filter, None)
            .await?
            .map(decode::<R>)
            .transpose()
    }

    async fn list(&self, params: ListParams) -> Result<Vec<R>, ServiceError> {
        let Some(options) = find_options(params) else {
            return Ok(Vec::new());
        };
        let cursor = self.collection.find(doc! {}, options).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        docs.into_iter().map(decode::<R>).collect()
    }

    async fn replace_fields(&self, id: &RecordId, fields: &R::Base) -> Result<u64, ServiceError> {
        let filter = doc! { "_id": object_id(id)? };
        let update = doc! { "$set": encode(fields)? };
        let result = self.collection.update_one(filter, update, None).await?;
        Ok(result.matched_count)
    }

    async fn delete(&self, id: &RecordId) -> Result<u64, ServiceError> {
        let filter = doc! { "_id": object_id(id)? };
        let result = self.collection.delete_one(filter, None).await?;
        Ok(result.deleted_count)
    }
}
