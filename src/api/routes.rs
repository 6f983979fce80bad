// API route configuration

use crate::api::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(handlers::health_check))
        // Catalog CRUD
        .service(
            web::scope("/jogos")
                .route("", web::get().to(handlers::list_games))
                .route("", web::post().to(handlers::insert_game))
                .route("/{id}", web::get().to(handlers::get_game))
                .route("/{id}", web::put().to(handlers::update_game))
                .route("/{id}", web::delete().to(handlers::delete_game))
                .route(
                    "/{id}/preco/{preco}",
                    web::patch().to(handlers::update_price),
                ),
        );
}
