use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital Management System API",
        version = "1.0.0",
        description = "CRUD endpoints for doctors, patients and appointments.\n\nAppointments store the doctor and patient as free text; nothing links them to stored records and no scheduling rules are enforced."
    ),
    paths(
        crate::api::health::health_check,

        crate::api::doctors::create_doctor,
        crate::api::doctors::list_doctors,
        crate::api::doctors::update_doctor,
        crate::api::doctors::delete_doctor,

        crate::api::patients::create_patient,
        crate::api::patients::list_patients,
        crate::api::patients::update_patient,
        crate::api::patients::delete_patient,

        crate::api::appointments::create_appointment,
        crate::api::appointments::list_appointments,
        crate::api::appointments::update_appointment,
        crate::api::appointments::delete_appointment,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::resource::MessageResponse,
            crate::utils::ErrorResponse,

            crate::models::CreateDoctorRequest,
            crate::models::UpdateDoctorRequest,
            crate::models::DoctorResponse,

            crate::models::CreatePatientRequest,
            crate::models::UpdatePatientRequest,
            crate::models::PatientResponse,

            crate::models::CreateAppointmentRequest,
            crate::models::UpdateAppointmentRequest,
            crate::models::AppointmentResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoint for monitoring."),
        (name = "Doctors", description = "Create, list, update and delete doctors."),
        (name = "Patients", description = "Create, list, update and delete patients."),
        (name = "Appointments", description = "Create, list, update and delete appointments."),
    )
)]
pub struct ApiDoc;
