use mongodb::bson::{oid::ObjectId, Document};
use serde::{de::DeserializeOwned, Serialize};

use crate::utils::AppError;

/// A document type stored in its own collection.
///
/// Implementors describe where they live, what a partial update looks like,
/// and how that update is applied both in memory and as a `$set` document.
pub trait Record: Serialize + DeserializeOwned + Clone + Unpin + Send + Sync + 'static {
    /// MongoDB collection name, also used as the plural in messages
    const COLLECTION: &'static str;

    /// Capitalised entity name ("Doctor")
    const LABEL: &'static str;

    type Changes: Send + Sync;

    /// JSON shape returned to clients
    type Response: Serialize + From<Self>;

    fn id(&self) -> Option<ObjectId>;

    fn set_id(&mut self, id: ObjectId);

    /// Rejects updates that would blank a required field.
    fn validate_changes(changes: &Self::Changes) -> Result<(), AppError>;

    fn apply(&mut self, changes: &Self::Changes);

    /// Fields to `$set`; empty when the update carries nothing.
    fn changes_document(changes: &Self::Changes) -> Document;
}
