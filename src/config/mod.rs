use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_BASE_PATH: &str = "/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_STORAGE_PATH: &str = ".wildnest/storage.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_base_path: String,
    pub timeout_ms: u64,
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_base_path: DEFAULT_API_BASE_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ClientError> {
        dotenv::dotenv().ok();

        let timeout_ms = match env::var("WILDNEST_TIMEOUT_MS") {
            Ok(raw) => raw
                .trim_end_matches("ms")
                .parse::<u64>()
                .map_err(|_| ClientError::Config(format!("WILDNEST_TIMEOUT_MS 无效: {}", raw)))?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        Ok(Config {
            base_url: env::var("WILDNEST_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            api_base_path: env::var("WILDNEST_API_BASE_PATH")
                .unwrap_or_else(|_| DEFAULT_API_BASE_PATH.into()),
            timeout_ms,
            storage_path: env::var("WILDNEST_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH)),
        })
    }

    /// 以指定服务地址构造，其余取默认值
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
            ..Config::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 拼接完整请求地址: base_url + api_base_path + path
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_base_path.trim_end_matches('/');
        let prefix = if prefix.is_empty() || prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{}", prefix)
        };

        if path.starts_with('/') {
            format!("{}{}{}", base, prefix, path)
        } else {
            format!("{}{}/{}", base, prefix, path)
        }
    }
}
