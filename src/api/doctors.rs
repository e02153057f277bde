use actix_web::{web, HttpResponse};

use super::resource::{self, MessageResponse};
use crate::database::Stores;
use crate::models::{CreateDoctorRequest, DoctorResponse, UpdateDoctorRequest};
use crate::utils::{AppError, ErrorResponse};

/// POST /doctors - Registers a doctor
#[utoipa::path(
    post,
    path = "/doctors",
    tag = "Doctors",
    request_body = CreateDoctorRequest,
    responses(
        (status = 201, description = "Doctor created", body = DoctorResponse),
        (status = 500, description = "Missing field or database failure", body = ErrorResponse)
    )
)]
pub async fn create_doctor(
    stores: web::Data<Stores>,
    body: web::Json<CreateDoctorRequest>,
) -> Result<HttpResponse, AppError> {
    resource::create(stores.doctors.as_ref(), body.into_inner().into_record()).await
}

/// GET /doctors - Lists every doctor
#[utoipa::path(
    get,
    path = "/doctors",
    tag = "Doctors",
    responses(
        (status = 200, description = "All doctors", body = [DoctorResponse]),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_doctors(stores: web::Data<Stores>) -> Result<HttpResponse, AppError> {
    resource::list(stores.doctors.as_ref()).await
}

/// PUT /doctors/{id} - Changes the given fields of a doctor
#[utoipa::path(
    put,
    path = "/doctors/{id}",
    tag = "Doctors",
    params(("id" = String, Path, description = "Doctor id")),
    request_body = UpdateDoctorRequest,
    responses(
        (status = 200, description = "Doctor after the update", body = DoctorResponse),
        (status = 404, description = "Doctor not found", body = ErrorResponse),
        (status = 500, description = "Invalid field or database failure", body = ErrorResponse)
    )
)]
pub async fn update_doctor(
    stores: web::Data<Stores>,
    path: web::Path<String>,
    body: web::Json<UpdateDoctorRequest>,
) -> Result<HttpResponse, AppError> {
    resource::update(stores.doctors.as_ref(), &path.into_inner(), body.into_inner()).await
}

/// DELETE /doctors/{id} - Removes a doctor; appointments naming them are left alone
#[utoipa::path(
    delete,
    path = "/doctors/{id}",
    tag = "Doctors",
    params(("id" = String, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "Doctor deleted", body = MessageResponse),
        (status = 404, description = "Doctor not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn delete_doctor(
    stores: web::Data<Stores>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    resource::delete(stores.doctors.as_ref(), &path.into_inner()).await
}
