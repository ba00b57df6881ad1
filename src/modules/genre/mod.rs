use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_genres).post(handler::create_genre))
        // Literal "id" segment with a query parameter, kept from the published contract.
        .route("/id", get(handler::get_genre))
        .route(
            "/{id}",
            axum::routing::put(handler::update_genre).delete(handler::delete_genre),
        )
}
