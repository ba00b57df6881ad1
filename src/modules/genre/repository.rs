use super::model::Genre;
use crate::infrastructure::db::pool::DbPool;
use anyhow::{Result, anyhow};

pub struct GenreRepository;

impl GenreRepository {
    pub async fn create(pool: &DbPool, name: &str) -> Result<Genre> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name)
            VALUES (?)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await
        .map_err(|e| anyhow!("Failed to create genre: {}", e))?;

        Ok(genre)
    }

    pub async fn find_all(pool: &DbPool) -> Result<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genres
            ORDER BY name ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch genres: {}", e))?;

        Ok(genres)
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| anyhow!("Failed to fetch genre: {}", e))?;

        Ok(genre)
    }

    /// Existence probe used by the movie handlers to validate foreign keys
    /// before a write.
    pub async fn exists(pool: &DbPool, id: i64) -> Result<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM genres WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| anyhow!("Failed to check genre: {}", e))?;

        Ok(found.is_some())
    }

    pub async fn update(pool: &DbPool, id: i64, name: &str) -> Result<Genre> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET name = ?
            WHERE id = ?
            RETURNING id, name
            "#,
        )
        .bind(name)
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(|e| anyhow!("Failed to update genre: {}", e))?;

        Ok(genre)
    }

    // No check for movies that still reference the genre; deletion is unguarded.
    pub async fn delete(pool: &DbPool, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM genres WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| anyhow!("Failed to delete genre: {}", e))?;

        Ok(())
    }
}
