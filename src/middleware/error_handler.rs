use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::warn;

use super::Notifier;
use crate::{error::ClientError, result::ApiResult, utils::messages};

/// 按 HTTP 状态码选择提示文案；`None` 表示没有收到响应
pub fn transport_message(status: Option<StatusCode>) -> &'static str {
    match status.map(|s| s.as_u16()) {
        Some(401) => messages::UNAUTHORIZED,
        Some(403) => messages::FORBIDDEN,
        Some(404) => messages::NOT_FOUND,
        Some(500) => messages::INTERNAL_ERROR,
        Some(_) => messages::NETWORK_ERROR,
        None => messages::CONNECTION_FAILED,
    }
}

/// 响应拦截：剥离信封，失败时提示并原样向上抛出
#[derive(Clone)]
pub struct ResponseInterceptor {
    notifier: Arc<dyn Notifier>,
}

impl ResponseInterceptor {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub async fn handle(
        &self,
        outcome: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<Value, ClientError> {
        let response = outcome
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| self.on_transport_error(e))?;

        // 只有 2xx 才解析信封
        let status = response.status();
        if !status.is_success() {
            return Err(self.on_unexpected_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.on_transport_error(e))?;

        self.on_envelope(ApiResult::parse(&body))
    }

    /// 信封处理：code == 200 只返回 data
    pub fn on_envelope(&self, envelope: ApiResult<Value>) -> Result<Value, ClientError> {
        if envelope.is_success() {
            return Ok(envelope.data.unwrap_or(Value::Null));
        }

        let message = envelope
            .message()
            .unwrap_or(messages::REQUEST_FAILED)
            .to_string();
        warn!("业务请求失败 - code: {:?}, message: {}", envelope.code, message);
        self.notifier.notify(&message);

        Err(ClientError::Business {
            code: envelope.code,
            message,
        })
    }

    pub fn on_transport_error(&self, error: reqwest::Error) -> ClientError {
        let status = error.status();
        warn!("HTTP 请求失败 - status: {:?}, error: {}", status, error);
        self.notifier.notify(transport_message(status));
        ClientError::Http(error)
    }

    pub fn on_unexpected_status(&self, status: StatusCode) -> ClientError {
        warn!("HTTP 状态异常 - status: {}", status);
        self.notifier.notify(transport_message(Some(status)));
        ClientError::Status(status)
    }
}

impl std::fmt::Debug for ResponseInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseInterceptor").finish_non_exhaustive()
    }
}
