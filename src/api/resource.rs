//! Create/list/update/delete, written once for every record type.
//!
//! The per-resource modules only pick the store and carry the OpenAPI
//! annotations; the behaviour lives here.

use actix_web::HttpResponse;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::database::RecordStore;
use crate::models::Record;
use crate::utils::AppError;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn hex_id<R: Record>(record: &R) -> String {
    record.id().map(|id| id.to_hex()).unwrap_or_default()
}

/// An id that cannot be an ObjectId cannot match a record either.
fn parse_id<R: Record>(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::not_found(R::LABEL))
}

pub async fn create<R: Record>(
    store: &dyn RecordStore<R>,
    record: Result<R, AppError>,
) -> Result<HttpResponse, AppError> {
    let context = || format!("Error adding {}", R::LABEL.to_lowercase());

    let record = record.map_err(|e| e.context(context()))?;
    let created = store.insert(record).await.map_err(|e| e.context(context()))?;

    log::info!("✅ {} created: {}", R::LABEL, hex_id(&created));
    Ok(HttpResponse::Created().json(R::Response::from(created)))
}

pub async fn list<R: Record>(store: &dyn RecordStore<R>) -> Result<HttpResponse, AppError> {
    let records = store
        .find_all()
        .await
        .map_err(|e| e.context(format!("Error fetching {}", R::COLLECTION)))?;

    let body: Vec<R::Response> = records.into_iter().map(R::Response::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

pub async fn update<R: Record>(
    store: &dyn RecordStore<R>,
    id: &str,
    changes: R::Changes,
) -> Result<HttpResponse, AppError> {
    let object_id = parse_id::<R>(id)?;
    R::validate_changes(&changes)?;

    match store.update(&object_id, &changes).await? {
        Some(updated) => {
            log::info!("✏️  {} updated: {}", R::LABEL, id);
            Ok(HttpResponse::Ok().json(R::Response::from(updated)))
        }
        None => Err(AppError::not_found(R::LABEL)),
    }
}

pub async fn delete<R: Record>(store: &dyn RecordStore<R>, id: &str) -> Result<HttpResponse, AppError> {
    let object_id = parse_id::<R>(id)?;

    if !store.delete(&object_id).await? {
        return Err(AppError::not_found(R::LABEL));
    }

    log::info!("🗑️  {} deleted: {}", R::LABEL, id);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("{} deleted successfully", R::LABEL),
    }))
}
