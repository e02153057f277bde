use actix_web::{web, HttpResponse};

use super::resource::{self, MessageResponse};
use crate::database::Stores;
use crate::models::{AppointmentResponse, CreateAppointmentRequest, UpdateAppointmentRequest};
use crate::utils::{AppError, ErrorResponse};

/// POST /appointments - Books an appointment
///
/// Doctor and patient are stored as given; there is no overlap check.
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "Appointments",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentResponse),
        (status = 500, description = "Missing field or database failure", body = ErrorResponse)
    )
)]
pub async fn create_appointment(
    stores: web::Data<Stores>,
    body: web::Json<CreateAppointmentRequest>,
) -> Result<HttpResponse, AppError> {
    resource::create(stores.appointments.as_ref(), body.into_inner().into_record()).await
}

/// GET /appointments - Lists every appointment
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "Appointments",
    responses(
        (status = 200, description = "All appointments", body = [AppointmentResponse]),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_appointments(stores: web::Data<Stores>) -> Result<HttpResponse, AppError> {
    resource::list(stores.appointments.as_ref()).await
}

/// PUT /appointments/{id} - Changes the given fields of an appointment
#[utoipa::path(
    put,
    path = "/appointments/{id}",
    tag = "Appointments",
    params(("id" = String, Path, description = "Appointment id")),
    request_body = UpdateAppointmentRequest,
    responses(
        (status = 200, description = "Appointment after the update", body = AppointmentResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse),
        (status = 500, description = "Invalid field or database failure", body = ErrorResponse)
    )
)]
pub async fn update_appointment(
    stores: web::Data<Stores>,
    path: web::Path<String>,
    body: web::Json<UpdateAppointmentRequest>,
) -> Result<HttpResponse, AppError> {
    resource::update(stores.appointments.as_ref(), &path.into_inner(), body.into_inner()).await
}

/// DELETE /appointments/{id} - Cancels an appointment
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tag = "Appointments",
    params(("id" = String, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment deleted", body = MessageResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn delete_appointment(
    stores: web::Data<Stores>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    resource::delete(stores.appointments.as_ref(), &path.into_inner()).await
}
