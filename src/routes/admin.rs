use actix_web::{web, HttpResponse, Responder};
use crate::models::MaintenanceResponse;
use crate::routes::matches::{error_response, AppState};
use crate::services::{Catalog, PostgresError};

/// Configure catalog maintenance routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/admin/reset-favorites", web::post().to(reset_favorites))
        .route("/admin/clear", web::post().to(clear_catalog))
        .route("/admin/reseed", web::post().to(reseed_catalog));
}

fn maintenance_response(operation: &str, result: Result<u64, PostgresError>) -> HttpResponse {
    match result {
        Ok(affected) => HttpResponse::Ok().json(MaintenanceResponse {
            operation: operation.to_string(),
            affected,
        }),
        Err(e) => {
            tracing::error!("Maintenance operation {} failed: {}", operation, e);
            error_response(500, "Maintenance operation failed", e.to_string())
        }
    }
}

/// POST /api/v1/admin/reset-favorites
async fn reset_favorites(state: web::Data<AppState>) -> impl Responder {
    maintenance_response("reset-favorites", state.postgres.reset_favorites().await)
}

/// POST /api/v1/admin/clear
async fn clear_catalog(state: web::Data<AppState>) -> impl Responder {
    let result = state.postgres.clear_catalog().await;
    state.catalog.invalidate().await;

    maintenance_response("clear", result)
}

/// POST /api/v1/admin/reseed
///
/// Replaces the breeds table with the configured seed file. The snapshot is
/// dropped even on failure since the count check runs after commit.
async fn reseed_catalog(state: web::Data<AppState>) -> impl Responder {
    let seed = match Catalog::from_seed_file(&*state.seed_path) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!("Could not read seed file {}: {}", state.seed_path, e);
            return error_response(500, "Failed to read seed file", e.to_string());
        }
    };

    let result = state.postgres.force_reseed(&seed).await;
    state.catalog.invalidate().await;

    maintenance_response("reseed", result)
}
