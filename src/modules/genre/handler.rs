use super::dto::{CreateGenreRequest, GenreIdQuery, UpdateGenreRequest};
use super::model::Genre;
use super::service::GenreService;
use crate::common::response::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

/// List all genres
#[utoipa::path(
    get,
    path = "/api/Geners",
    responses(
        (status = 200, description = "All genres, sorted by name", body = Vec<Genre>)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match GenreService::get_all(&state).await {
        Ok(genres) => Json(genres).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

/// Get genre by id (query parameter)
#[utoipa::path(
    get,
    path = "/api/Geners/id",
    params(
        ("id" = i64, Query, description = "Genre id")
    ),
    responses(
        (status = 200, description = "Genre", body = Genre),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Query(query): Query<GenreIdQuery>,
) -> impl IntoResponse {
    match GenreService::get_by_id(&state, query.id).await {
        Ok(Some(genre)) => Json(genre).into_response(),
        Ok(None) => ApiError::not_found(format!("No genre with id: {}", query.id)).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/api/Geners",
    request_body = CreateGenreRequest,
    responses(
        (status = 200, description = "Created genre", body = Genre)
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<CreateGenreRequest>,
) -> impl IntoResponse {
    match GenreService::add(&state, &payload.name).await {
        Ok(genre) => Json(genre).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

/// Update genre name
#[utoipa::path(
    put,
    path = "/api/Geners/{id}",
    params(
        ("id" = i64, Path, description = "Genre id")
    ),
    request_body = UpdateGenreRequest,
    responses(
        (status = 200, description = "Updated genre", body = Genre),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateGenreRequest>,
) -> impl IntoResponse {
    match GenreService::get_by_id(&state, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiError::not_found(format!("No genre was found with ID: {id}"))
                .into_response();
        }
        Err(e) => return ApiError::internal(e).into_response(),
    }

    match GenreService::update(&state, id, &payload.name).await {
        Ok(genre) => Json(genre).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

/// Delete genre
#[utoipa::path(
    delete,
    path = "/api/Geners/{id}",
    params(
        ("id" = i64, Path, description = "Genre id")
    ),
    responses(
        (status = 200, description = "Deleted genre", body = Genre),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn delete_genre(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    let genre = match GenreService::get_by_id(&state, id).await {
        Ok(Some(genre)) => genre,
        Ok(None) => {
            return ApiError::not_found(format!("No genre was found with id: {id}"))
                .into_response();
        }
        Err(e) => return ApiError::internal(e).into_response(),
    };

    match GenreService::delete(&state, id).await {
        Ok(()) => Json(genre).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}
