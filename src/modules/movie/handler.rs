use super::dto::{GenreIdParam, MovieDetails, MovieForm, PosterFile};
use super::model::{Movie, NewMovie};
use super::repository::MovieRepository;
use crate::common::response::ApiError;
use crate::config::settings::UploadConfig;
use crate::modules::genre::repository::GenreRepository;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    response::IntoResponse,
};
use tracing::info;
use validator::Validate;

/// List all movies, highest rated first
#[utoipa::path(
    get,
    path = "/api/Movies",
    responses(
        (status = 200, description = "Movies with genre details, sorted by rate descending", body = Vec<MovieDetails>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> impl IntoResponse {
    match MovieRepository::list_details(&state.db).await {
        Ok(movies) => Json(movies).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

/// Get movie by id
#[utoipa::path(
    get,
    path = "/api/Movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie id")
    ),
    responses(
        (status = 200, description = "Movie with genre details", body = MovieDetails),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match MovieRepository::find_details(&state.db, id).await {
        Ok(Some(movie)) => Json(movie).into_response(),
        Ok(None) => ApiError::not_found(format!("No Movie Found with id: {id}")).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

/// List movies in a genre, highest rated first
#[utoipa::path(
    get,
    path = "/api/Movies/GetByGenreId",
    params(
        ("genreId" = i64, Query, description = "Genre id")
    ),
    responses(
        (status = 200, description = "Movies in the genre; empty array when none match", body = Vec<MovieDetails>)
    ),
    tag = "Movies"
)]
pub async fn get_movies_by_genre(
    State(state): State<AppState>,
    Query(params): Query<GenreIdParam>,
) -> impl IntoResponse {
    match MovieRepository::list_details_by_genre(&state.db, params.genre_id).await {
        Ok(movies) => Json(movies).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

fn validate_poster(upload: &UploadConfig, poster: &PosterFile) -> Result<(), ApiError> {
    let allowed = poster
        .extension()
        .map(|ext| upload.allowed_extensions.contains(&ext))
        .unwrap_or(false);
    if !allowed {
        return Err(ApiError::bad_request(
            "Only .png and .jpg images are allowed!",
        ));
    }

    if poster.bytes.len() > upload.max_poster_bytes {
        return Err(ApiError::bad_request("max allowed size for poster is 1 MB"));
    }

    Ok(())
}

/// Create a movie from a multipart form
#[utoipa::path(
    post,
    path = "/api/Movies",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created movie", body = Movie),
        (status = 400, description = "Invalid poster or genre id")
    ),
    tag = "Movies"
)]
pub async fn create_movie(State(state): State<AppState>, multipart: Multipart) -> impl IntoResponse {
    let form = match MovieForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };

    if let Err(e) = form.validate() {
        return ApiError::bad_request(e.to_string()).into_response();
    }

    if let Some(poster) = &form.poster {
        if let Err(e) = validate_poster(&state.config.upload, poster) {
            return e.into_response();
        }
    }

    match GenreRepository::exists(&state.db, form.genre_id).await {
        Ok(true) => {}
        Ok(false) => return ApiError::bad_request("Invalid genre id!").into_response(),
        Err(e) => return ApiError::internal(e).into_response(),
    }

    let new_movie = NewMovie {
        title: form.title,
        year: form.year,
        rate: form.rate,
        storeline: form.storeline,
        poster: form.poster.map(|p| p.bytes),
        genre_id: form.genre_id,
    };

    match MovieRepository::create(&state.db, new_movie).await {
        Ok(movie) => {
            info!("Created movie {} ({})", movie.id, movie.title);
            Json(movie).into_response()
        }
        Err(e) => ApiError::internal(e).into_response(),
    }
}

/// Update a movie from a multipart form; the poster is replaced only when a
/// new file is supplied
#[utoipa::path(
    put,
    path = "/api/Movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie id")
    ),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated movie", body = Movie),
        (status = 400, description = "Invalid poster or genre id"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> impl IntoResponse {
    let form = match MovieForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };

    if let Err(e) = form.validate() {
        return ApiError::bad_request(e.to_string()).into_response();
    }

    match MovieRepository::find_by_id(&state.db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiError::not_found(format!("No Movie Found with id: {id}")).into_response();
        }
        Err(e) => return ApiError::internal(e).into_response(),
    }

    match GenreRepository::exists(&state.db, form.genre_id).await {
        Ok(true) => {}
        Ok(false) => return ApiError::bad_request("Invalid Genre Id !!!").into_response(),
        Err(e) => return ApiError::internal(e).into_response(),
    }

    if let Some(poster) = &form.poster {
        if let Err(e) = validate_poster(&state.config.upload, poster) {
            return e.into_response();
        }
    }

    let update = NewMovie {
        title: form.title,
        year: form.year,
        rate: form.rate,
        storeline: form.storeline,
        poster: form.poster.map(|p| p.bytes),
        genre_id: form.genre_id,
    };

    match MovieRepository::update(&state.db, id, update).await {
        Ok(movie) => Json(movie).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/api/Movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie id")
    ),
    responses(
        (status = 200, description = "Deleted movie", body = Movie),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    let movie = match MovieRepository::find_by_id(&state.db, id).await {
        Ok(Some(movie)) => movie,
        Ok(None) => {
            return ApiError::not_found(format!("No Movie Found with id: {id}")).into_response();
        }
        Err(e) => return ApiError::internal(e).into_response(),
    };

    match MovieRepository::delete(&state.db, id).await {
        Ok(()) => Json(movie).into_response(),
        Err(e) => ApiError::internal(e).into_response(),
    }
}
