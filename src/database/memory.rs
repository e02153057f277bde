//! In-memory store used by the handler tests.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::RecordStore;
use crate::models::Record;
use crate::utils::AppError;

pub struct MemoryStore<R> {
    records: RwLock<Vec<R>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn insert(&self, record: R) -> Result<R, AppError> {
        let mut created = record;
        created.set_id(ObjectId::new());
        self.records.write().await.push(created.clone());
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<R>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn update(&self, id: &ObjectId, changes: &R::Changes) -> Result<Option<R>, AppError> {
        let mut records = self.records.write().await;
        Ok(records
            .iter_mut()
            .find(|r| r.id().as_ref() == Some(id))
            .map(|r| {
                r.apply(changes);
                r.clone()
            }))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id().as_ref() != Some(id));
        Ok(records.len() < before)
    }
}

/// Store whose every call fails, for exercising the 500 paths.
pub struct FailingStore;

#[async_trait]
impl<R: Record> RecordStore<R> for FailingStore {
    async fn insert(&self, _record: R) -> Result<R, AppError> {
        Err(AppError::persistence("connection refused"))
    }

    async fn find_all(&self) -> Result<Vec<R>, AppError> {
        Err(AppError::persistence("connection refused"))
    }

    async fn update(&self, _id: &ObjectId, _changes: &R::Changes) -> Result<Option<R>, AppError> {
        Err(AppError::persistence("connection refused"))
    }

    async fn delete(&self, _id: &ObjectId) -> Result<bool, AppError> {
        Err(AppError::persistence("connection refused"))
    }
}
