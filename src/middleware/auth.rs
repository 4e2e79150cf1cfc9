use reqwest::header::{AUTHORIZATION, HeaderValue};

use super::RequestStage;
use crate::{cache::TokenStore, error::ClientError};

/// 请求拦截：存在管理员令牌时附加 `Authorization: Bearer <token>`
#[derive(Debug, Clone)]
pub struct BearerAuth {
    tokens: TokenStore,
}

impl BearerAuth {
    pub fn new(tokens: TokenStore) -> Self {
        Self { tokens }
    }
}

impl RequestStage for BearerAuth {
    fn name(&self) -> &'static str {
        "bearer_auth"
    }

    fn apply(&self, request: &mut reqwest::Request) -> Result<(), ClientError> {
        let Some(token) = self.tokens.get()? else {
            // 没有令牌不算错误，原样发送
            return Ok(());
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::Method;

    use super::*;
    use crate::cache::MemoryStorage;

    fn request() -> reqwest::Request {
        reqwest::Request::new(
            Method::GET,
            "http://localhost/api/admin/info".parse().unwrap(),
        )
    }

    fn tokens() -> TokenStore {
        TokenStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn attaches_bearer_header_when_token_present() {
        let tokens = tokens();
        tokens.set("admin-token-2024").unwrap();

        let mut req = request();
        BearerAuth::new(tokens).apply(&mut req).unwrap();

        assert_eq!(
            req.headers().get(AUTHORIZATION).unwrap(),
            "Bearer admin-token-2024"
        );
    }

    #[test]
    fn leaves_headers_untouched_without_token() {
        let mut req = request();
        BearerAuth::new(tokens()).apply(&mut req).unwrap();
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn rejects_token_that_is_not_a_header_value() {
        let tokens = tokens();
        tokens.set("bad\ntoken").unwrap();

        let mut req = request();
        let err = BearerAuth::new(tokens).apply(&mut req).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader(_)));
    }
}
