use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::Matcher;
use crate::models::{
    default_preferences, ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse,
};
use crate::services::{Catalog, CatalogCache, PostgresClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub catalog: CatalogCache,
    pub matcher: Matcher,
    /// Seed file used by the reseed maintenance route
    pub seed_path: Arc<str>,
}

impl AppState {
    /// Current catalog snapshot, loaded from PostgreSQL on a cache miss
    pub(crate) async fn snapshot(&self) -> Result<Arc<Catalog>, HttpResponse> {
        self.catalog
            .get_or_load(self.postgres.load_catalog())
            .await
            .map_err(|e| {
                tracing::error!("Failed to load breed catalog: {}", e);
                error_response(500, "Failed to load breed catalog", e.to_string())
            })
    }
}

pub(crate) fn error_response(status_code: u16, error: &str, message: String) -> HttpResponse {
    let body = ErrorResponse {
        error: error.to_string(),
        message,
        status_code,
    };

    match status_code {
        400 => HttpResponse::BadRequest().json(body),
        404 => HttpResponse::NotFound().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

/// Configure health, preference, and matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/preferences/default", web::get().to(get_default_preferences))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/preferences/default
async fn get_default_preferences() -> impl Responder {
    HttpResponse::Ok().json(default_preferences())
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body (every field optional):
/// ```json
/// {
///   "size": "Medium",
///   "energyLevel": "Any",
///   "goodWithKids": true,
///   "goodWithPets": null,
///   "trainability": "High",
///   "groomingNeeds": "Low",
///   "role": "Companion",
///   "seniorFriendly": null,
///   "specialNeedsOk": null,
///   "prioritizeAdoptable": true,
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return error_response(400, "Validation failed", errors.to_string());
    }

    let catalog = match state.snapshot().await {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let result = state
        .matcher
        .find_matches(&req.preferences, catalog.breeds(), req.limit as usize);

    tracing::info!(
        "Returning {} matches (from {} candidates, {} shelter-eligible, {} size-eligible)",
        result.matches.len(),
        result.total_candidates,
        result.shelter_eligible,
        result.size_eligible
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        shelter_eligible: result.shelter_eligible,
        size_eligible: result.size_eligible,
    })
}
