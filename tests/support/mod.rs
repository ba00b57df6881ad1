#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use axum::response::Response;
use tower::ServiceExt as _;

use movies_api::app::create_app;
use movies_api::config::settings::{AppConfig, UploadConfig};
use movies_api::infrastructure::db::pool::DbPool;
use movies_api::state::AppState;

pub const BOUNDARY: &str = "movies-api-test-boundary";

pub async fn init_db() -> DbPool {
    use std::str::FromStr as _;
    const DB_URL: &str = "sqlite::memory:";
    // Match production: FK pragma left off so genre deletion stays unguarded
    // (sqlx enables it by default).
    let options = sqlx::sqlite::SqliteConnectOptions::from_str(DB_URL)
        .unwrap()
        .foreign_keys(false);
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();

    pool
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
        upload: UploadConfig::default(),
    }
}

pub async fn test_app() -> (Router, DbPool) {
    let db = init_db().await;
    let state = AppState::new(test_config(), db.clone());
    (create_app(state).await, db)
}

pub async fn seed_genre(db: &DbPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO genres (name) VALUES (?) RETURNING id")
        .bind(name)
        .fetch_one(db)
        .await
        .unwrap()
}

pub async fn movie_count(db: &DbPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(db)
        .await
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds the multipart form the movie endpoints consume.
pub struct MovieFormBuilder {
    fields: Vec<(String, String)>,
    poster: Option<(String, Vec<u8>)>,
}

impl MovieFormBuilder {
    pub fn new(title: &str, year: i32, rate: f64, storeline: &str, genre_id: i64) -> Self {
        Self {
            fields: vec![
                ("title".to_string(), title.to_string()),
                ("year".to_string(), year.to_string()),
                ("rate".to_string(), rate.to_string()),
                ("storeline".to_string(), storeline.to_string()),
                ("genreId".to_string(), genre_id.to_string()),
            ],
            poster: None,
        }
    }

    pub fn poster(mut self, file_name: &str, bytes: Vec<u8>) -> Self {
        self.poster = Some((file_name.to_string(), bytes));
        self
    }

    pub fn request(self, method: &str, uri: &str) -> Request<Body> {
        let mut body = Vec::new();
        for (name, value) in &self.fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, bytes)) = &self.poster {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"poster\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
