use std::sync::Arc;

use super::storage::KeyValueStorage;

/// 管理员令牌的存储键
pub const ADMIN_TOKEN_KEY: &str = "admin_token";

/// 管理员令牌存储
///
/// 同一时间最多保存一个令牌；不做过期校验。
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// 读取令牌，空字符串视为不存在
    pub fn get(&self) -> std::io::Result<Option<String>> {
        Ok(self
            .storage
            .get_item(ADMIN_TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    pub fn set(&self, token: &str) -> std::io::Result<()> {
        tracing::debug!("保存管理员令牌");
        self.storage.set_item(ADMIN_TOKEN_KEY, token)
    }

    /// 清除令牌；未保存令牌时什么也不做
    pub fn clear(&self) -> std::io::Result<()> {
        tracing::debug!("清除管理员令牌");
        self.storage.remove_item(ADMIN_TOKEN_KEY)
    }

    /// 读取失败按未登录处理
    pub fn is_authenticated(&self) -> bool {
        match self.get() {
            Ok(token) => token.is_some(),
            Err(e) => {
                tracing::warn!("读取管理员令牌失败: {}", e);
                false
            }
        }
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStorage;

    fn store() -> TokenStore {
        TokenStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn set_then_get_returns_token() {
        let tokens = store();
        tokens.set("admin-token-2024").unwrap();
        assert_eq!(tokens.get().unwrap().as_deref(), Some("admin-token-2024"));
        assert!(tokens.is_authenticated());
    }

    #[test]
    fn clear_without_token_is_noop() {
        let tokens = store();
        tokens.clear().unwrap();
        tokens.clear().unwrap();
        assert_eq!(tokens.get().unwrap(), None);
    }

    #[test]
    fn last_write_wins() {
        let tokens = store();
        let other_tab = tokens.clone();
        tokens.set("first").unwrap();
        other_tab.set("second").unwrap();
        assert_eq!(tokens.get().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn empty_token_reads_as_absent() {
        let tokens = store();
        tokens.set("").unwrap();
        assert_eq!(tokens.get().unwrap(), None);
        assert!(!tokens.is_authenticated());
    }
}
