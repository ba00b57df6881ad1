use super::dto::MovieDetails;
use super::model::{Movie, NewMovie};
use crate::infrastructure::db::pool::DbPool;
use anyhow::{Result, anyhow};

const MOVIE_COLUMNS: &str = "id, title, year, rate, storeline, poster, genre_id";

// Movie reads always join the genre explicitly; there is no lazy loading.
const DETAILS_SELECT: &str = r#"
    SELECT m.id, m.title, m.year, m.rate, m.storeline, m.poster, m.genre_id,
           g.name AS genre_name
    FROM movies m
    JOIN genres g ON g.id = m.genre_id
"#;

pub struct MovieRepository;

impl MovieRepository {
    pub async fn create(pool: &DbPool, movie: NewMovie) -> Result<Movie> {
        let movie = sqlx::query_as::<_, Movie>(&format!(
            r#"
            INSERT INTO movies (title, year, rate, storeline, poster, genre_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(movie.title)
        .bind(movie.year)
        .bind(movie.rate)
        .bind(movie.storeline)
        .bind(movie.poster)
        .bind(movie.genre_id)
        .fetch_one(pool)
        .await
        .map_err(|e| anyhow!("Failed to create movie: {}", e))?;

        Ok(movie)
    }

    pub async fn list_details(pool: &DbPool) -> Result<Vec<MovieDetails>> {
        let movies = sqlx::query_as::<_, MovieDetails>(&format!(
            "{DETAILS_SELECT} ORDER BY m.rate DESC"
        ))
        .fetch_all(pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch movies: {}", e))?;

        Ok(movies)
    }

    pub async fn find_details(pool: &DbPool, id: i64) -> Result<Option<MovieDetails>> {
        let movie = sqlx::query_as::<_, MovieDetails>(&format!(
            "{DETAILS_SELECT} WHERE m.id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch movie: {}", e))?;

        Ok(movie)
    }

    pub async fn list_details_by_genre(pool: &DbPool, genre_id: i64) -> Result<Vec<MovieDetails>> {
        let movies = sqlx::query_as::<_, MovieDetails>(&format!(
            "{DETAILS_SELECT} WHERE m.genre_id = ? ORDER BY m.rate DESC"
        ))
        .bind(genre_id)
        .fetch_all(pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch movies by genre: {}", e))?;

        Ok(movies)
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch movie: {}", e))?;

        Ok(movie)
    }

    /// Overwrites every field except the poster, which is only replaced when a
    /// new blob is supplied.
    pub async fn update(pool: &DbPool, id: i64, movie: NewMovie) -> Result<Movie> {
        let movie = sqlx::query_as::<_, Movie>(&format!(
            r#"
            UPDATE movies
            SET title = ?,
                year = ?,
                rate = ?,
                storeline = ?,
                poster = COALESCE(?, poster),
                genre_id = ?
            WHERE id = ?
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(movie.title)
        .bind(movie.year)
        .bind(movie.rate)
        .bind(movie.storeline)
        .bind(movie.poster)
        .bind(movie.genre_id)
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(|e| anyhow!("Failed to update movie: {}", e))?;

        Ok(movie)
    }

    pub async fn delete(pool: &DbPool, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| anyhow!("Failed to delete movie: {}", e))?;

        Ok(())
    }
}
