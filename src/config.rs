//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Where the post collection lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub request_timeout: Duration,
    pub max_concurrent_requests: usize,
    /// Mutating requests allowed per minute across all clients. 0 disables the limit.
    pub write_rate_per_minute: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            storage: StorageBackend::File(PathBuf::from("data/posts.json")),
            request_timeout: Duration::from_secs(10),
            max_concurrent_requests: 256,
            write_rate_per_minute: 120,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_file = lookup("BLOG_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/posts.json"));
        let storage = match lookup("BLOG_STORAGE").as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("memory") => StorageBackend::Memory,
            _ => StorageBackend::File(data_file),
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            storage,
            request_timeout: parse_var(&lookup, "REQUEST_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            max_concurrent_requests: parse_var(&lookup, "MAX_CONCURRENT_REQUESTS")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.max_concurrent_requests),
            write_rate_per_minute: parse_var(&lookup, "WRITE_RATE_PER_MINUTE")
                .unwrap_or(defaults.write_rate_per_minute),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
