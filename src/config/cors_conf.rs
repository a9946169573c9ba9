use std::env;
use tracing::{debug, warn};

/// CORS configuration: comma-separated list of allowed origins.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Load from ALLOWED_ORIGINS (comma-separated). Defaults to the local
    /// frontend dev server.
    pub fn from_env() -> Self {
        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => {
                warn!("ALLOWED_ORIGINS not set, allowing http://localhost:3000 only");
                vec!["http://localhost:3000".to_string()]
            }
        };
        debug!("CORS allowed origins: {:?}", allowed_origins);
        CorsConfig { allowed_origins }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins("https://app.example.com/, http://localhost:3000");
        assert_eq!(
            origins,
            vec![
                "https://app.example.com".to_string(),
                "http://localhost:3000".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_origins_skips_empty_entries() {
        let origins = parse_origins("http://localhost:3000,,");
        assert_eq!(origins.len(), 1);
    }
}
