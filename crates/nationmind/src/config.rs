use tracing::info;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "NATIONMIND_API_URL";
/// Backend development address.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Resolve configuration: the command-line value wins, then
    /// `NATIONMIND_API_URL`, then the development default.
    pub fn resolve(api_url_override: Option<String>) -> Self {
        let api_url = match api_url_override {
            Some(url) => url,
            None => match std::env::var(API_URL_ENV) {
                Ok(url) if !url.trim().is_empty() => {
                    info!(%url, "loaded backend URL from env");
                    url
                }
                _ => DEFAULT_API_URL.to_string(),
            },
        };
        Self { api_url }
    }

    pub fn from_env() -> Self {
        Self::resolve(None)
    }
}
