use std::ffi::OsStr;
use std::path::Path;
use std::str::FromStr;

use axum::extract::Multipart;
use axum::extract::multipart::Field;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::response::ApiError;

/// Response projection flattening the joined genre name alongside the movie
/// fields. Built per response, never persisted.
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub storeline: String,
    pub poster: Option<Vec<u8>>,
    pub genre_id: i64,
    pub genre_name: String,
}

#[derive(Debug, Deserialize)]
pub struct GenreIdParam {
    #[serde(rename = "genreId")]
    pub genre_id: i64,
}

#[derive(Debug)]
pub struct PosterFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PosterFile {
    /// Lowercased extension of the uploaded file name, without the dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
    }
}

/// Multipart form for movie create and update. The poster is optional; update
/// keeps the stored blob when it is absent.
#[derive(Debug, Validate)]
pub struct MovieForm {
    pub title: String,
    pub year: i32,
    pub rate: f64,
    #[validate(length(max = 2500, message = "storeline must be at most 2500 characters"))]
    pub storeline: String,
    pub genre_id: i64,
    pub poster: Option<PosterFile>,
}

impl MovieForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut title = None;
        let mut year = None;
        let mut rate = None;
        let mut storeline = None;
        let mut genre_id = None;
        let mut poster = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "title" => title = Some(read_text(field, "title").await?),
                "year" => year = Some(parse_field(field, "year").await?),
                "rate" => rate = Some(parse_field(field, "rate").await?),
                "storeline" => storeline = Some(read_text(field, "storeline").await?),
                "genreId" => genre_id = Some(parse_field(field, "genreId").await?),
                "poster" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::bad_request(e.to_string()))?;
                    poster = Some(PosterFile {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
                _ => {}
            }
        }

        Ok(Self {
            title: required(title, "title")?,
            year: required(year, "year")?,
            rate: required(rate, "rate")?,
            storeline: required(storeline, "storeline")?,
            genre_id: required(genre_id, "genreId")?,
            poster,
        })
    }
}

async fn read_text(field: Field<'_>, name: &str) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|_| ApiError::bad_request(format!("Invalid value for field '{name}'")))
}

async fn parse_field<T: FromStr>(field: Field<'_>, name: &str) -> Result<T, ApiError> {
    let raw = read_text(field, name).await?;
    raw.trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid value for field '{name}'")))
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(format!("Missing required field '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poster(file_name: &str) -> PosterFile {
        PosterFile {
            file_name: file_name.to_string(),
            bytes: vec![],
        }
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(poster("cover.PNG").extension().as_deref(), Some("png"));
        assert_eq!(poster("cover.Jpg").extension().as_deref(), Some("jpg"));
    }

    #[test]
    fn missing_extension_is_none() {
        assert_eq!(poster("cover").extension(), None);
        assert_eq!(poster("").extension(), None);
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(poster("cover.png.gif").extension().as_deref(), Some("gif"));
    }
}
