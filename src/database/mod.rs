mod store;
#[cfg(test)]
pub mod memory;

pub use store::{MongoStore, RecordStore};

use mongodb::{options::ClientOptions, Client, Collection, Database};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{Appointment, Doctor, Patient};

const DEFAULT_DATABASE: &str = "hospitalDB";

/// Connection handle; the driver pools connections behind the client.
#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        // Database name comes from the URI path, e.g. mongodb://host:27017/hospitalDB
        let db_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.list_collection_names().await?;

        Ok(Self { db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }
}

/// One store per resource, shared by every worker for the process lifetime.
#[derive(Clone)]
pub struct Stores {
    pub doctors: Arc<dyn RecordStore<Doctor>>,
    pub patients: Arc<dyn RecordStore<Patient>>,
    pub appointments: Arc<dyn RecordStore<Appointment>>,
}

impl Stores {
    pub fn mongo(db: &MongoDB) -> Self {
        Self {
            doctors: Arc::new(MongoStore::<Doctor>::new(db)),
            patients: Arc::new(MongoStore::<Patient>::new(db)),
            appointments: Arc::new(MongoStore::<Appointment>::new(db)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateDoctorRequest;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_round_trip() {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://127.0.0.1:27017/hospitalDB_test".to_string());

        let db = MongoDB::new(&uri).await.expect("Failed to connect to MongoDB");
        let stores = Stores::mongo(&db);

        let doctor = CreateDoctorRequest {
            name: Some("Test Doctor".into()),
            specialty: Some("Testing".into()),
        }
        .into_record()
        .unwrap();

        let created = stores.doctors.insert(doctor).await.unwrap();
        let id = created.id.expect("inserted doctor has an id");

        assert!(stores.doctors.find_all().await.unwrap().iter().any(|d| d.id == Some(id)));
        assert!(stores.doctors.delete(&id).await.unwrap());
        assert!(!stores.doctors.delete(&id).await.unwrap());
    }
}
