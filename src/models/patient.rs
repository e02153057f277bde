use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

use super::Record;
use crate::utils::validation::{non_blank_if_present, required, required_text};
use crate::utils::AppError;

/// Patient (stored in MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

/// Request to create a patient
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePatientRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

impl CreatePatientRequest {
    pub fn into_record(self) -> Result<Patient, AppError> {
        Ok(Patient {
            id: None,
            name: required_text(Patient::LABEL, "name", self.name)?,
            age: required(Patient::LABEL, "age", self.age)?,
            gender: required_text(Patient::LABEL, "gender", self.gender)?,
        })
    }
}

/// Request to update a patient; omitted fields are left alone
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

impl UpdatePatientRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        non_blank_if_present(Patient::LABEL, "name", self.name.as_ref())?;
        non_blank_if_present(Patient::LABEL, "gender", self.gender.as_ref())
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PatientResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl From<Patient> for PatientResponse {
    fn from(p: Patient) -> Self {
        PatientResponse {
            id: p.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: p.name,
            age: p.age,
            gender: p.gender,
        }
    }
}

impl Record for Patient {
    const COLLECTION: &'static str = "patients";
    const LABEL: &'static str = "Patient";

    type Changes = UpdatePatientRequest;
    type Response = PatientResponse;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn validate_changes(changes: &UpdatePatientRequest) -> Result<(), AppError> {
        changes.validate()
    }

    fn apply(&mut self, changes: &UpdatePatientRequest) {
        if let Some(name) = &changes.name { self.name = name.clone(); }
        if let Some(age) = changes.age { self.age = age; }
        if let Some(gender) = &changes.gender { self.gender = gender.clone(); }
    }

    fn changes_document(changes: &UpdatePatientRequest) -> Document {
        let mut set = Document::new();
        if let Some(name) = &changes.name { set.insert("name", name); }
        if let Some(age) = changes.age { set.insert("age", Bson::Int64(i64::from(age))); }
        if let Some(gender) = &changes.gender { set.insert("gender", gender); }
        set
    }
}
