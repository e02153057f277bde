use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use super::MongoDB;
use crate::models::Record;
use crate::utils::AppError;

/// Persistence operations shared by every resource.
///
/// `update` and `delete` report a missing document as `None`/`false`, leaving
/// it to the caller to turn that into a not-found response.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Inserts the record and returns it with its assigned id.
    async fn insert(&self, record: R) -> Result<R, AppError>;

    async fn find_all(&self) -> Result<Vec<R>, AppError>;

    /// Applies `changes` and returns the record as stored afterwards.
    async fn update(&self, id: &ObjectId, changes: &R::Changes) -> Result<Option<R>, AppError>;

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;
}

pub struct MongoStore<R: Record> {
    collection: Collection<R>,
}

impl<R: Record> MongoStore<R> {
    pub fn new(db: &MongoDB) -> Self {
        Self {
            collection: db.collection::<R>(R::COLLECTION),
        }
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MongoStore<R> {
    async fn insert(&self, record: R) -> Result<R, AppError> {
        let result = self.collection.insert_one(&record).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::persistence(format!("unexpected inserted id: {}", result.inserted_id))
        })?;

        let mut created = record;
        created.set_id(id);
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<R>, AppError> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut records = Vec::new();
        while let Some(result) = cursor.next().await {
            records.push(result?);
        }

        Ok(records)
    }

    async fn update(&self, id: &ObjectId, changes: &R::Changes) -> Result<Option<R>, AppError> {
        let set = R::changes_document(changes);

        // Nothing to $set: hand back the document as it is
        if set.is_empty() {
            return Ok(self.collection.find_one(doc! { "_id": *id }).await?);
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }
}
