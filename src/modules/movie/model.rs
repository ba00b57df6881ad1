use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub storeline: String,
    pub poster: Option<Vec<u8>>,
    pub genre_id: i64,
}

/// Field values for a movie write. On update, `poster: None` keeps the stored
/// blob; all other fields overwrite unconditionally.
#[derive(Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub storeline: String,
    pub poster: Option<Vec<u8>>,
    pub genre_id: i64,
}
