use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use pawmatch::config::{LoggingSettings, Settings};
use pawmatch::core::Matcher;
use pawmatch::routes::{self, AppState};
use pawmatch::services::{Catalog, CatalogCache, PostgresClient};
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors, including unknown category values
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Initialize logging; LOG_LEVEL/RUST_LOG and LOG_FORMAT override the config
fn init_logging(logging: &LoggingSettings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

/// Seed an empty database from the configured JSON file
async fn seed_catalog(postgres: &PostgresClient, seed_path: &str) {
    let catalog = match Catalog::from_seed_file(seed_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!("Could not read seed file {}: {}", seed_path, e);
            return;
        }
    };

    match postgres.seed_if_empty(&catalog).await {
        Ok(0) => info!("Breed catalog already seeded"),
        Ok(count) => info!("Seeded {} breeds from {}", count, seed_path),
        Err(e) => error!("Failed to seed breed catalog: {}", e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting PawMatch breed matching service...");

    let postgres = PostgresClient::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
    )
    .await
    .map_err(|e| {
        error!("Failed to connect to PostgreSQL: {}", e);
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;
    let postgres = Arc::new(postgres);

    info!("PostgreSQL client initialized");

    seed_catalog(&postgres, &settings.catalog.seed_path).await;

    let catalog = CatalogCache::new(settings.catalog.snapshot_ttl_secs);
    match catalog.get_or_load(postgres.load_catalog()).await {
        Ok(snapshot) => info!("Catalog snapshot ready: {} breeds", snapshot.len()),
        Err(e) => warn!("Catalog snapshot not loaded at startup: {}", e),
    }

    let policy = settings.matching.policy();
    let matcher = Matcher::new(settings.scoring.weights, policy);

    info!("Matcher initialized with policy: {:?}", policy);

    let app_state = AppState {
        postgres,
        catalog,
        matcher,
        seed_path: Arc::from(settings.catalog.seed_path.as_str()),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
