use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGenreRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGenreRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GenreIdQuery {
    pub id: i64,
}
