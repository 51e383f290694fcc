use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub rate_limit: RateLimitConfig,
    pub catalog: CatalogConfig,
    pub upload: UploadConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Fixed-window limits for the rate-limited demo endpoint
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests admitted per client per window
    pub max_requests: u32,
    pub window: Duration,
    /// How often expired windows are purged from memory
    pub sweep_interval: Duration,
}

/// Upstream product catalog (dummyjson) settings
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub page_size: u32,
    pub request_timeout: Duration,
    /// Quiet period a search waits before hitting upstream
    pub search_debounce: Duration,
}

/// Local disk storage for image uploads
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_bytes: usize,
    /// URL prefix the upload directory is served under
    pub public_path: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            rate_limit: RateLimitConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
            upload: UploadConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

/// Read `key` and parse it, falling back to `default` when unset
fn parse_var<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr + ToString,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", key))
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size =
            parse_var("MAX_REQUEST_BODY_SIZE", Self::DEFAULT_MAX_REQUEST_BODY_SIZE)?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl RateLimitConfig {
    const DEFAULT_MAX_REQUESTS: u32 = 10;
    const DEFAULT_WINDOW_SECS: u64 = 60;
    const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300; // 5 minutes

    pub fn from_env() -> Result<Self, String> {
        let max_requests = parse_var("RATE_LIMIT_MAX_REQUESTS", Self::DEFAULT_MAX_REQUESTS)?;
        if max_requests == 0 {
            return Err("RATE_LIMIT_MAX_REQUESTS must be at least 1".to_string());
        }

        let window_secs = parse_var("RATE_LIMIT_WINDOW_SECS", Self::DEFAULT_WINDOW_SECS)?;
        if window_secs == 0 {
            return Err("RATE_LIMIT_WINDOW_SECS must be at least 1".to_string());
        }

        let sweep_secs = parse_var(
            "RATE_LIMIT_SWEEP_INTERVAL_SECS",
            Self::DEFAULT_SWEEP_INTERVAL_SECS,
        )?;

        Ok(Self {
            max_requests,
            window: Duration::from_secs(window_secs),
            sweep_interval: Duration::from_secs(sweep_secs.max(1)),
        })
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: Self::DEFAULT_MAX_REQUESTS,
            window: Duration::from_secs(Self::DEFAULT_WINDOW_SECS),
            sweep_interval: Duration::from_secs(Self::DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }
}

impl CatalogConfig {
    const DEFAULT_BASE_URL: &'static str = "https://dummyjson.com";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 1000;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let page_size = parse_var("CATALOG_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(format!(
                "CATALOG_PAGE_SIZE must be between 1 and {}",
                MAX_PAGE_SIZE
            ));
        }

        let timeout_secs = parse_var("CATALOG_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?;
        let debounce_ms = parse_var("SEARCH_DEBOUNCE_MS", Self::DEFAULT_SEARCH_DEBOUNCE_MS)?;

        Ok(Self {
            base_url,
            page_size,
            request_timeout: Duration::from_secs(timeout_secs),
            search_debounce: Duration::from_millis(debounce_ms),
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            search_debounce: Duration::from_millis(Self::DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

impl UploadConfig {
    const DEFAULT_DIR: &'static str = "public/uploads";
    const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024; // 5MB
    const DEFAULT_PUBLIC_PATH: &'static str = "/uploads";

    pub fn from_env() -> Result<Self, String> {
        let dir = PathBuf::from(
            env::var("UPLOAD_DIR").unwrap_or_else(|_| Self::DEFAULT_DIR.to_string()),
        );
        let max_bytes = parse_var("UPLOAD_MAX_BYTES", Self::DEFAULT_MAX_BYTES)?;

        let public_path = env::var("UPLOAD_PUBLIC_PATH")
            .unwrap_or_else(|_| Self::DEFAULT_PUBLIC_PATH.to_string());
        if !public_path.starts_with('/') {
            return Err("UPLOAD_PUBLIC_PATH must start with '/'".to_string());
        }

        let public_path = public_path.trim_end_matches('/').to_string();
        if public_path.is_empty() {
            return Err("UPLOAD_PUBLIC_PATH cannot be the site root".to_string());
        }

        Ok(Self {
            dir,
            max_bytes,
            public_path,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());

        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Assessment Gallery API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Backend for the front-end assessment question gallery".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if both are configured
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Some(format!("{}:{}", u, p)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 1024,
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert!(swagger.credentials().is_none());

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials().as_deref(), Some("admin:secret"));
    }

    #[test]
    fn test_defaults_match_demo_contract() {
        let limits = RateLimitConfig::default();
        assert_eq!(limits.max_requests, 10);
        assert_eq!(limits.window, Duration::from_secs(60));

        let catalog = CatalogConfig::default();
        assert_eq!(catalog.base_url, "https://dummyjson.com");
        assert_eq!(catalog.page_size, 10);
        assert_eq!(catalog.search_debounce, Duration::from_millis(1000));
    }
}
