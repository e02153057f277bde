pub mod appointments;
pub mod doctors;
pub mod health;
pub mod patients;
pub mod resource;
pub mod swagger;

use actix_web::{web, HttpResponse, Responder};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::utils::AppError;

pub const BANNER: &str = "Hospital Management System Backend";

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(BANNER)
}

/// Body extraction failures count as persistence failures (500), not 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::persistence(err)
            .context("Invalid request payload")
            .into()
    })
}

/// Registers every route; `Stores` and `json_config` are expected as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health::health_check))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", swagger::ApiDoc::openapi()),
        )
        .service(
            web::scope("/doctors")
                .route("", web::post().to(doctors::create_doctor))
                .route("", web::get().to(doctors::list_doctors))
                .route("/{id}", web::put().to(doctors::update_doctor))
                .route("/{id}", web::delete().to(doctors::delete_doctor)),
        )
        .service(
            web::scope("/patients")
                .route("", web::post().to(patients::create_patient))
                .route("", web::get().to(patients::list_patients))
                .route("/{id}", web::put().to(patients::update_patient))
                .route("/{id}", web::delete().to(patients::delete_patient)),
        )
        .service(
            web::scope("/appointments")
                .route("", web::post().to(appointments::create_appointment))
                .route("", web::get().to(appointments::list_appointments))
                .route("/{id}", web::put().to(appointments::update_appointment))
                .route("/{id}", web::delete().to(appointments::delete_appointment)),
        );
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::database::memory::{FailingStore, MemoryStore};
    use crate::database::Stores;
    use crate::models::{Appointment, Doctor, Patient};

    pub fn memory_stores() -> Stores {
        Stores {
            doctors: Arc::new(MemoryStore::<Doctor>::new()),
            patients: Arc::new(MemoryStore::<Patient>::new()),
            appointments: Arc::new(MemoryStore::<Appointment>::new()),
        }
    }

    pub fn failing_stores() -> Stores {
        Stores {
            doctors: Arc::new(FailingStore),
            patients: Arc::new(FailingStore),
            appointments: Arc::new(FailingStore),
        }
    }

    /// Builds the full router over the given stores.
    macro_rules! init_app {
        ($stores:expr) => {
            actix_web::test::init_service(
                actix_web::App::new()
                    .app_data(actix_web::web::Data::new($stores))
                    .app_data($crate::api::json_config())
                    .configure($crate::api::configure),
            )
        };
    }

    pub(crate) use init_app;
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    use super::test_support::{init_app, memory_stores};

    #[actix_web::test]
    async fn root_serves_the_banner() {
        let app = init_app!(memory_stores()).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(&body[..], super::BANNER.as_bytes());
    }

    #[actix_web::test]
    async fn health_reports_the_service() {
        let app = init_app!(memory_stores()).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "hospital-service");
    }

    #[actix_web::test]
    async fn openapi_lists_every_resource() {
        let app = init_app!(memory_stores()).await;

        let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
        let doc: Value = test::call_and_read_body_json(&app, req).await;
        for path in ["/doctors", "/doctors/{id}", "/patients", "/patients/{id}", "/appointments", "/appointments/{id}"] {
            assert!(doc["paths"].get(path).is_some(), "missing {}", path);
        }
    }

    #[actix_web::test]
    async fn deleting_a_doctor_leaves_their_appointments() {
        let app = init_app!(memory_stores()).await;

        let req = test::TestRequest::post()
            .uri("/doctors")
            .set_json(json!({ "name": "Dr. Grey", "specialty": "Surgery" }))
            .to_request();
        let doctor: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/appointments")
            .set_json(json!({ "patient": "John Doe", "doctor": "Dr. Grey", "date": "2024-10-01" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::delete()
            .uri(&format!("/doctors/{}", doctor["_id"].as_str().unwrap()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/appointments").to_request();
        let appointments: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0]["doctor"], "Dr. Grey");
    }
}
