use mongodb::bson::{oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

use super::Record;
use crate::utils::dates;
use crate::utils::validation::{non_blank_if_present, required, required_text};
use crate::utils::AppError;

/// Appointment (stored in MongoDB)
///
/// `patient` and `doctor` are free text. Nothing ties them to stored
/// patients or doctors, and nothing checks for overlapping dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub patient: String,
    pub doctor: String,
    pub date: DateTime,
}

/// Request to book an appointment
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateAppointmentRequest {
    pub patient: Option<String>,
    pub doctor: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub date: Option<DateTime>,
}

impl CreateAppointmentRequest {
    pub fn into_record(self) -> Result<Appointment, AppError> {
        Ok(Appointment {
            id: None,
            patient: required_text(Appointment::LABEL, "patient", self.patient)?,
            doctor: required_text(Appointment::LABEL, "doctor", self.doctor)?,
            date: required(Appointment::LABEL, "date", self.date)?,
        })
    }
}

/// Request to update an appointment; omitted fields are left alone
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateAppointmentRequest {
    pub patient: Option<String>,
    pub doctor: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub date: Option<DateTime>,
}

impl UpdateAppointmentRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        non_blank_if_present(Appointment::LABEL, "patient", self.patient.as_ref())?;
        non_blank_if_present(Appointment::LABEL, "doctor", self.doctor.as_ref())
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AppointmentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub patient: String,
    pub doctor: String,
    /// RFC 3339, millisecond precision
    pub date: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        AppointmentResponse {
            id: a.id.map(|id| id.to_hex()).unwrap_or_default(),
            patient: a.patient,
            doctor: a.doctor,
            date: dates::format_date(a.date),
        }
    }
}

impl Record for Appointment {
    const COLLECTION: &'static str = "appointments";
    const LABEL: &'static str = "Appointment";

    type Changes = UpdateAppointmentRequest;
    type Response = AppointmentResponse;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn validate_changes(changes: &UpdateAppointmentRequest) -> Result<(), AppError> {
        changes.validate()
    }

    fn apply(&mut self, changes: &UpdateAppointmentRequest) {
        if let Some(patient) = &changes.patient { self.patient = patient.clone(); }
        if let Some(doctor) = &changes.doctor { self.doctor = doctor.clone(); }
        if let Some(date) = changes.date { self.date = date; }
    }

    fn changes_document(changes: &UpdateAppointmentRequest) -> Document {
        let mut set = Document::new();
        if let Some(patient) = &changes.patient { set.insert("patient", patient); }
        if let Some(doctor) = &changes.doctor { set.insert("doctor", doctor); }
        if let Some(date) = changes.date { set.insert("date", date); }
        set
    }
}
