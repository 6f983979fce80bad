// HTTP request handlers for the catalog endpoints

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::models::{HealthResponse, ListQuery};
use crate::catalog::{CatalogService, GameInput};

/// Health check endpoint
pub async fn health_check(service: web::Data<CatalogService>) -> HttpResponse {
    let storage = match service.ping_storage().await {
        Ok(()) => "connected",
        Err(_) => "disconnected",
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        backend: service.backend_name().to_string(),
        storage: storage.to_string(),
    })
}

/// Paginated listing; an empty page answers 204.
pub async fn list_games(
    query: web::Query<ListQuery>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, ApiError> {
    query.validate().map_err(ApiError::Validation)?;

    let games = service.list(query.pagina, query.quantidade).await?;
    if games.is_empty() {
        return Ok(HttpResponse::NoContent().finish());
    }
    Ok(HttpResponse::Ok().json(games))
}

pub async fn get_game(
    path: web::Path<Uuid>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, ApiError> {
    let game = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(game))
}

pub async fn insert_game(
    payload: web::Json<GameInput>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, ApiError> {
    let input = payload.into_inner();
    input.validate().map_err(ApiError::Validation)?;

    let created = service.insert(input).await?;
    tracing::info!(id = %created.id, nome = %created.name, "game inserted");
    Ok(HttpResponse::Ok().json(created))
}

pub async fn update_game(
    path: web::Path<Uuid>,
    payload: web::Json<GameInput>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, ApiError> {
    let input = payload.into_inner();
    input.validate().map_err(ApiError::Validation)?;

    service.update_full(path.into_inner(), input).await?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn update_price(
    path: web::Path<(Uuid, f64)>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, ApiError> {
    let (id, preco) = path.into_inner();
    if !preco.is_finite() || preco < 0.0 {
        return Err(ApiError::Validation(
            "o campo preco deve ser um valor não negativo".to_string(),
        ));
    }

    service.update_price(id, preco).await?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn delete_game(
    path: web::Path<Uuid>,
    service: web::Data<CatalogService>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    service.remove(id).await?;
    tracing::info!(id = %id, "game removed");
    Ok(HttpResponse::Ok().finish())
}
