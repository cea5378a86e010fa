use actix_web::{web, HttpResponse, Responder};
use crate::models::{BreedQuery, FavoriteResponse};
use crate::routes::matches::{error_response, AppState};
use crate::services::PostgresError;

/// Configure catalog, favorites, and stats routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/breeds", web::get().to(list_breeds))
        .route("/breeds/search", web::post().to(search_breeds))
        .route("/breeds/{id}", web::get().to(get_breed))
        .route("/favorites", web::get().to(list_favorites))
        .route("/favorites/{id}", web::post().to(add_favorite))
        .route("/favorites/{id}", web::delete().to(remove_favorite))
        .route("/stats", web::get().to(get_stats));
}

/// GET /api/v1/breeds
async fn list_breeds(state: web::Data<AppState>) -> impl Responder {
    match state.snapshot().await {
        Ok(catalog) => HttpResponse::Ok().json(catalog.breeds()),
        Err(response) => response,
    }
}

/// GET /api/v1/breeds/{id}
async fn get_breed(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    let catalog = match state.snapshot().await {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    match catalog.get(id) {
        Some(breed) => HttpResponse::Ok().json(breed),
        None => error_response(404, "Breed not found", format!("No breed with id {}", id)),
    }
}

/// POST /api/v1/breeds/search
async fn search_breeds(
    state: web::Data<AppState>,
    query: web::Json<BreedQuery>,
) -> impl Responder {
    let catalog = match state.snapshot().await {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let found = catalog.search(&query);
    tracing::debug!("Breed search matched {} of {} breeds", found.len(), catalog.len());

    HttpResponse::Ok().json(found)
}

/// GET /api/v1/favorites
async fn list_favorites(state: web::Data<AppState>) -> impl Responder {
    match state.postgres.favorites().await {
        Ok(favorites) => HttpResponse::Ok().json(favorites),
        Err(e) => {
            tracing::error!("Failed to fetch favorites: {}", e);
            error_response(500, "Failed to fetch favorites", e.to_string())
        }
    }
}

/// POST /api/v1/favorites/{id}
async fn add_favorite(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let breed_id = path.into_inner();

    match state.postgres.add_favorite(breed_id).await {
        Ok(()) => HttpResponse::Ok().json(FavoriteResponse {
            breed_id,
            favorited: true,
        }),
        Err(PostgresError::NotFound(what)) => {
            error_response(404, "Breed not found", format!("No {}", what))
        }
        Err(e) => {
            tracing::error!("Failed to favorite breed {}: {}", breed_id, e);
            error_response(500, "Failed to add favorite", e.to_string())
        }
    }
}

/// DELETE /api/v1/favorites/{id}
async fn remove_favorite(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let breed_id = path.into_inner();

    match state.postgres.remove_favorite(breed_id).await {
        Ok(was_favorite) => {
            if !was_favorite {
                tracing::debug!("Breed {} was not a favorite", breed_id);
            }
            HttpResponse::Ok().json(FavoriteResponse {
                breed_id,
                favorited: false,
            })
        }
        Err(e) => {
            tracing::error!("Failed to unfavorite breed {}: {}", breed_id, e);
            error_response(500, "Failed to remove favorite", e.to_string())
        }
    }
}

/// GET /api/v1/stats
async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    match state.postgres.stats().await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => {
            tracing::error!("Failed to fetch stats: {}", e);
            error_response(500, "Failed to fetch stats", e.to_string())
        }
    }
}
