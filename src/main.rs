mod api;
mod config;
mod database;
mod models;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;

use crate::config::AppConfig;
use crate::database::{MongoDB, Stores};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env()?;

    log::info!("🚀 Starting Hospital Service...");
    log::info!("📊 Database: {}", config.database_url);

    let db = MongoDB::new(&config.database_url).await.map_err(|e| {
        log::error!("❌ Error connecting to MongoDB: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    log::info!("✅ Connected to MongoDB ({})", db.database_name());

    let stores = web::Data::new(Stores::mongo(&db));

    log::info!("🌐 Server running at http://{}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(stores.clone())
            .app_data(api::json_config())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
