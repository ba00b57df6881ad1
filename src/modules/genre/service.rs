use super::model::Genre;
use super::repository::GenreRepository;
use crate::state::AppState;
use anyhow::Result;

pub struct GenreService;

impl GenreService {
    /// All genres, sorted by name ascending.
    pub async fn get_all(state: &AppState) -> Result<Vec<Genre>> {
        GenreRepository::find_all(&state.db).await
    }

    /// Missing rows are `None`, not an error; callers decide the status code.
    pub async fn get_by_id(state: &AppState, id: i64) -> Result<Option<Genre>> {
        GenreRepository::find_by_id(&state.db, id).await
    }

    pub async fn add(state: &AppState, name: &str) -> Result<Genre> {
        GenreRepository::create(&state.db, name).await
    }

    pub async fn update(state: &AppState, id: i64, name: &str) -> Result<Genre> {
        GenreRepository::update(&state.db, id, name).await
    }

    pub async fn delete(state: &AppState, id: i64) -> Result<()> {
        GenreRepository::delete(&state.db, id).await
    }
}
