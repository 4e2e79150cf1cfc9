use std::sync::Arc;

use cache::{FileStorage, TokenStore};
use client::ApiClient;
use config::Config;
use error::ClientError;
use middleware::Notifier;
use router::{RouteTable, RouteTableError, Router};

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod result;
pub mod router;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: ApiClient,
    pub tokens: TokenStore,
}

impl AppState {
    /// 令牌保存在 `config.storage_path` 指向的本地文件中
    pub fn new(config: Config, notifier: Arc<dyn Notifier>) -> Result<Self, ClientError> {
        let tokens = TokenStore::new(Arc::new(FileStorage::new(config.storage_path.clone())));
        let client = ApiClient::new(config.clone(), tokens.clone(), notifier)?;
        Ok(AppState {
            config,
            client,
            tokens,
        })
    }

    pub fn router(&self) -> Result<Router, RouteTableError> {
        Ok(Router::new(RouteTable::wildnest()?, self.tokens.clone()))
    }
}
