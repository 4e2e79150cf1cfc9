use thiserror::Error;

/// 客户端调用错误
#[derive(Debug, Error)]
pub enum ClientError {
    /// 业务失败: 响应信封 code != 200
    #[error("{message}")]
    Business { code: Option<i64>, message: String },

    /// 传输层失败，保留原始错误（可能带有 HTTP 状态码）
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// 非 2xx 且 reqwest 未判为错误的状态（1xx / 3xx）
    #[error("HTTP 状态异常: {0}")]
    Status(reqwest::StatusCode),

    #[error("响应数据解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("本地存储错误: {0}")]
    Storage(#[from] std::io::Error),

    #[error("请求头无效: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("{0}")]
    InvalidUpload(String),

    #[error("配置错误: {0}")]
    Config(String),
}

impl ClientError {
    /// 传输层错误对应的 HTTP 状态码
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ClientError::Http(e) => e.status(),
            ClientError::Status(status) => Some(*status),
            _ => None,
        }
    }

    pub fn is_business(&self) -> bool {
        matches!(self, ClientError::Business { .. })
    }
}
