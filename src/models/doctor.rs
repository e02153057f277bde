use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::Record;
use crate::utils::validation::{non_blank_if_present, required_text};
use crate::utils::AppError;

/// Doctor (stored in MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub specialty: String,
}

/// Request to create a doctor
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateDoctorRequest {
    pub name: Option<String>,
    pub specialty: Option<String>,
}

impl CreateDoctorRequest {
    pub fn into_record(self) -> Result<Doctor, AppError> {
        Ok(Doctor {
            id: None,
            name: required_text(Doctor::LABEL, "name", self.name)?,
            specialty: required_text(Doctor::LABEL, "specialty", self.specialty)?,
        })
    }
}

/// Request to update a doctor; omitted fields are left alone
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub specialty: Option<String>,
}

impl UpdateDoctorRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        non_blank_if_present(Doctor::LABEL, "name", self.name.as_ref())?;
        non_blank_if_present(Doctor::LABEL, "specialty", self.specialty.as_ref())
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DoctorResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl From<Doctor> for DoctorResponse {
    fn from(d: Doctor) -> Self {
        DoctorResponse {
            id: d.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: d.name,
            specialty: d.specialty,
        }
    }
}

impl Record for Doctor {
    const COLLECTION: &'static str = "doctors";
    const LABEL: &'static str = "Doctor";

    type Changes = UpdateDoctorRequest;
    type Response = DoctorResponse;

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn validate_changes(changes: &UpdateDoctorRequest) -> Result<(), AppError> {
        changes.validate()
    }

    fn apply(&mut self, changes: &UpdateDoctorRequest) {
        if let Some(name) = &changes.name { self.name = name.clone(); }
        if let Some(specialty) = &changes.specialty { self.specialty = specialty.clone(); }
    }

    fn changes_document(changes: &UpdateDoctorRequest) -> Document {
        let mut set = Document::new();
        if let Some(name) = &changes.name { set.insert("name", name); }
        if let Some(specialty) = &changes.specialty { set.insert("specialty", specialty); }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_every_field() {
        let request: CreateDoctorRequest = serde_json::from_str(r#"{"name":"Meredith Grey"}"#).unwrap();
        let err = request.into_record().unwrap_err();
        assert!(err.to_string().contains("Path `specialty` is required"));
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let parsed = serde_json::from_str::<UpdateDoctorRequest>(r#"{"name":"X","salary":1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn changes_document_only_holds_provided_fields() {
        let changes = UpdateDoctorRequest {
            name: None,
            specialty: Some("Cardiology".into()),
        };
        let set = Doctor::changes_document(&changes);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("specialty").unwrap(), "Cardiology");
    }
}
