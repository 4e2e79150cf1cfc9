use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 后端统一成功码
pub const SUCCESS_CODE: i64 = 200;

/// 后端统一响应信封 `{ code, message, data }`
///
/// 字段都按可缺省解析：不满足信封格式的响应体同样能被识别为业务失败，
/// 而不是解析错误。
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiResult<T = Value> {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: Some(SUCCESS_CODE),
            message: Some("success".to_string()),
            data: Some(data),
        }
    }

    pub fn error(code: i64, message: &str) -> Self {
        Self {
            code: Some(code),
            message: Some(message.to_string()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(SUCCESS_CODE)
    }

    /// 非空的服务端消息
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

impl ApiResult<Value> {
    /// 从原始响应体解析；不是 JSON 对象时返回空信封
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .ok()
            .filter(Value::is_object)
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_success_envelope() {
        let body = json!({"code": 200, "message": "ok", "data": {"id": 1}}).to_string();
        let envelope = ApiResult::parse(body.as_bytes());
        assert!(envelope.is_success());
        assert_eq!(envelope.data, Some(json!({"id": 1})));
    }

    #[test]
    fn non_envelope_body_is_not_success() {
        let envelope = ApiResult::parse(b"<html>gateway</html>");
        assert!(!envelope.is_success());
        assert_eq!(envelope.message(), None);

        let envelope = ApiResult::parse(b"[1,2,3]");
        assert!(!envelope.is_success());
    }

    #[test]
    fn empty_message_is_treated_as_absent() {
        let envelope = ApiResult::parse(br#"{"code":500,"message":""}"#);
        assert_eq!(envelope.message(), None);
    }
}
