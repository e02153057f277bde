use actix_web::{web, HttpResponse};

use super::resource::{self, MessageResponse};
use crate::database::Stores;
use crate::models::{CreatePatientRequest, PatientResponse, UpdatePatientRequest};
use crate::utils::{AppError, ErrorResponse};

/// POST /patients - Registers a patient
#[utoipa::path(
    post,
    path = "/patients",
    tag = "Patients",
    request_body = CreatePatientRequest,
    responses(
        (status = 201, description = "Patient created", body = PatientResponse),
        (status = 500, description = "Missing field or database failure", body = ErrorResponse)
    )
)]
pub async fn create_patient(
    stores: web::Data<Stores>,
    body: web::Json<CreatePatientRequest>,
) -> Result<HttpResponse, AppError> {
    resource::create(stores.patients.as_ref(), body.into_inner().into_record()).await
}

/// GET /patients - Lists every patient
#[utoipa::path(
    get,
    path = "/patients",
    tag = "Patients",
    responses(
        (status = 200, description = "All patients", body = [PatientResponse]),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_patients(stores: web::Data<Stores>) -> Result<HttpResponse, AppError> {
    resource::list(stores.patients.as_ref()).await
}

/// PUT /patients/{id} - Changes the given fields of a patient
#[utoipa::path(
    put,
    path = "/patients/{id}",
    tag = "Patients",
    params(("id" = String, Path, description = "Patient id")),
    request_body = UpdatePatientRequest,
    responses(
        (status = 200, description = "Patient after the update", body = PatientResponse),
        (status = 404, description = "Patient not found", body = ErrorResponse),
        (status = 500, description = "Invalid field or database failure", body = ErrorResponse)
    )
)]
pub async fn update_patient(
    stores: web::Data<Stores>,
    path: web::Path<String>,
    body: web::Json<UpdatePatientRequest>,
) -> Result<HttpResponse, AppError> {
    resource::update(stores.patients.as_ref(), &path.into_inner(), body.into_inner()).await
}

/// DELETE /patients/{id} - Removes a patient
#[utoipa::path(
    delete,
    path = "/patients/{id}",
    tag = "Patients",
    params(("id" = String, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Patient deleted", body = MessageResponse),
        (status = 404, description = "Patient not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn delete_patient(
    stores: web::Data<Stores>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    resource::delete(stores.patients.as_ref(), &path.into_inner()).await
}
