use serde::Deserialize;

use crate::config::env::{self, EnvKey};

/// Poster upload limits. Built once at startup and carried in
/// [`AppState`](crate::state::AppState); handlers never read loose constants.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadConfig {
    pub max_poster_bytes: usize,
    /// Lowercase extensions without the leading dot.
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_poster_bytes: 1_048_576,
            allowed_extensions: vec!["jpg".to_string(), "png".to_string()],
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub upload: UploadConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get(EnvKey::DatabaseUrl)?,
            upload: UploadConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_defaults_match_api_contract() {
        let upload = UploadConfig::default();
        assert_eq!(upload.max_poster_bytes, 1_048_576);
        assert_eq!(upload.allowed_extensions, vec!["jpg", "png"]);
    }
}
