use chrono::NaiveDateTime;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Deserializer};

/// 提示文案
pub mod messages {
    pub const REQUEST_FAILED: &str = "请求失败";
    pub const UNAUTHORIZED: &str = "未授权，请重新登录";
    pub const FORBIDDEN: &str = "权限不足";
    pub const NOT_FOUND: &str = "请求的资源不存在";
    pub const INTERNAL_ERROR: &str = "服务器内部错误";
    pub const NETWORK_ERROR: &str = "网络错误";
    pub const CONNECTION_FAILED: &str = "网络连接失败";
}

/// 路径参数编码，保证 `/`、`?` 等字符不会改变请求路径
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
}

/// 宽松解析时间字段：格式不认识时置空，不让整个响应解析失败
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => parse_datetime(&s),
        _ => None,
    })
}

/// 数字字段兼容字符串形式，例如 `"1024"`
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
