//! 统一的 HTTP 客户端
//!
//! 所有接口调用都经过同一条流水线：请求阶段（附加令牌）→ 发送 →
//! 响应拦截（剥离信封、统一提示）。调用方只拿到 `data` 或错误。

use std::sync::Arc;

use reqwest::{
    Method,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
    multipart::Form,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{Instrument, debug, warn};
use uuid::Uuid;

use crate::{
    cache::TokenStore,
    config::Config,
    error::ClientError,
    middleware::{BearerAuth, Notifier, RequestPipeline, RequestStage, ResponseInterceptor},
};

/// 请求体
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Form),
}

impl RequestBody {
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ClientError> {
        Ok(RequestBody::Json(serde_json::to_value(body)?))
    }
}

/// 单次请求的附加选项
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 把可序列化的参数对象展开为查询参数，`null` 字段会被跳过
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self, ClientError> {
        match serde_json::to_value(params)? {
            Value::Object(map) => {
                for (key, value) in map {
                    push_query(&mut self.query, &key, value);
                }
            }
            Value::Null => {}
            other => {
                return Err(ClientError::Config(format!(
                    "查询参数必须是对象: {}",
                    other
                )));
            }
        }
        Ok(self)
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

fn push_query(query: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => query.push((key.to_string(), s)),
        Value::Array(items) => {
            for item in items {
                push_query(query, key, item);
            }
        }
        other => query.push((key.to_string(), other.to_string())),
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<Config>,
    tokens: TokenStore,
    pipeline: RequestPipeline,
    interceptor: ResponseInterceptor,
}

impl ApiClient {
    pub fn new(
        config: Config,
        tokens: TokenStore,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            pipeline: RequestPipeline::new().with_stage(BearerAuth::new(tokens.clone())),
            tokens,
            interceptor: ResponseInterceptor::new(notifier),
        })
    }

    /// 在默认阶段之后追加请求阶段
    pub fn with_stage(mut self, stage: impl RequestStage + 'static) -> Self {
        self.pipeline = self.pipeline.with_stage(stage);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("api_request", %request_id, %method, path);

        async move {
            let url = self.config.endpoint(path);
            let mut builder = self.http.request(method, &url).headers(options.headers);
            if !options.query.is_empty() {
                builder = builder.query(&options.query);
            }
            builder = match body {
                RequestBody::Empty => builder,
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(form) => builder.multipart(form),
            };

            let mut request = builder.build()?;
            self.pipeline.run(&mut request)?;

            debug!("发送请求: {} {}", request.method(), request.url());
            let outcome = self.http.execute(request).await;
            let data = self.interceptor.handle(outcome).await?;

            serde_json::from_value(data).map_err(|e| {
                warn!("响应数据与预期结构不符: {}", e);
                ClientError::Decode(e)
            })
        }
        .instrument(span)
        .await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.get_with(path, RequestOptions::new()).await
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        self.request(Method::GET, path, RequestBody::Empty, options)
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(
            Method::POST,
            path,
            RequestBody::json(body)?,
            RequestOptions::new(),
        )
        .await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::POST, path, RequestBody::Empty, RequestOptions::new())
            .await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        self.request(
            Method::POST,
            path,
            RequestBody::Multipart(form),
            RequestOptions::new(),
        )
        .await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::cache::MemoryStorage;
    use crate::middleware::RecordingNotifier;

    #[derive(Debug, Deserialize, PartialEq)]
    struct DrinkStub {
        id: i64,
        name: String,
    }

    struct Harness {
        client: ApiClient,
        tokens: TokenStore,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness(config: Config) -> Harness {
        let tokens = TokenStore::new(Arc::new(MemoryStorage::new()));
        let notifier = Arc::new(RecordingNotifier::new());
        let client = ApiClient::new(config, tokens.clone(), notifier.clone()).unwrap();
        Harness {
            client,
            tokens,
            notifier,
        }
    }

    fn envelope(code: i64, message: &str, data: Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "code": code,
            "message": message,
            "data": data,
        }))
    }

    #[tokio::test]
    async fn success_strips_envelope() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/drinks/1"))
            .respond_with(envelope(200, "ok", json!({"id": 1, "name": "Mojito"})))
            .mount(&mock_server)
            .await;

        let h = harness(Config::with_base_url(mock_server.uri()));
        let drink: DrinkStub = h.client.get("/drinks/1").await.unwrap();

        assert_eq!(
            drink,
            DrinkStub {
                id: 1,
                name: "Mojito".into()
            }
        );
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn sends_json_content_type_and_bearer_token() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/info"))
            .and(header("Authorization", "Bearer admin-token-2024"))
            .and(header("Content-Type", "application/json"))
            .respond_with(envelope(200, "ok", json!({"username": "admin"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let h = harness(Config::with_base_url(mock_server.uri()));
        h.tokens.set("admin-token-2024").unwrap();

        let info: Value = h.client.get("/admin/info").await.unwrap();
        assert_eq!(info["username"], "admin");
    }

    #[tokio::test]
    async fn omits_authorization_without_token() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(envelope(200, "ok", json!([])))
            .mount(&mock_server)
            .await;

        let h = harness(Config::with_base_url(mock_server.uri()));
        let _: Vec<Value> = h.client.get("/categories").await.unwrap();

        let received = mock_server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(!received[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn business_failure_rejects_with_server_message() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/categories/search"))
            .and(query_param("keyword", "gin"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"code": 400, "message": "invalid keyword"})),
            )
            .mount(&mock_server)
            .await;

        let h = harness(Config::with_base_url(mock_server.uri()));
        let err = h
            .client
            .get_with::<Value>("/categories/search", RequestOptions::new().param("keyword", "gin"))
            .await
            .unwrap_err();

        assert!(err.is_business());
        assert_eq!(err.to_string(), "invalid keyword");
        assert_eq!(h.notifier.messages(), vec!["invalid keyword".to_string()]);
    }

    #[tokio::test]
    async fn http_401_notifies_and_keeps_original_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/info"))
            .respond_with(ResponseTemplate::new(401).set_body_string("whatever"))
            .mount(&mock_server)
            .await;

        let h = harness(Config::with_base_url(mock_server.uri()));
        let err = h.client.get::<Value>("/admin/info").await.unwrap_err();

        assert!(matches!(err, ClientError::Http(_)));
        assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
        assert_eq!(h.notifier.messages(), vec!["未授权，请重新登录".to_string()]);
    }

    #[tokio::test]
    async fn http_status_codes_map_to_fixed_messages() {
        let cases = [
            (403, "权限不足"),
            (404, "请求的资源不存在"),
            (500, "服务器内部错误"),
            (502, "网络错误"),
            (300, "网络错误"),
            (304, "网络错误"),
        ];

        for (status, expected) in cases {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&mock_server)
                .await;

            let h = harness(Config::with_base_url(mock_server.uri()));
            let err = h.client.get::<Value>("/drinks").await.unwrap_err();

            assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
            assert_eq!(h.notifier.messages(), vec![expected.to_string()]);
        }
    }

    #[tokio::test]
    async fn unreachable_server_reports_connection_failure() {
        // 端口 1 上没有服务
        let h = harness(Config::with_base_url("http://127.0.0.1:1"));
        let err = h.client.get::<Value>("/drinks").await.unwrap_err();

        assert!(matches!(err, ClientError::Http(_)));
        assert_eq!(err.status(), None);
        assert_eq!(h.notifier.messages(), vec!["网络连接失败".to_string()]);
    }

    #[tokio::test]
    async fn timeout_is_a_no_response_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(envelope(200, "ok", json!(1)).set_delay(Duration::from_millis(500)))
            .mount(&mock_server)
            .await;

        let config = Config {
            timeout_ms: 50,
            ..Config::with_base_url(mock_server.uri())
        };
        let h = harness(config);
        let err = h.client.get::<Value>("/drinks").await.unwrap_err();

        match err {
            ClientError::Http(ref e) => assert!(e.is_timeout()),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(h.notifier.messages(), vec!["网络连接失败".to_string()]);
    }

    #[tokio::test]
    async fn failing_request_stage_never_sends() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(envelope(200, "ok", json!(null)))
            .expect(0)
            .mount(&mock_server)
            .await;

        let h = harness(Config::with_base_url(mock_server.uri()));
        h.tokens.set("broken\ntoken").unwrap();

        let err = h.client.get::<Value>("/admin/info").await.unwrap_err();

        assert!(matches!(err, ClientError::InvalidHeader(_)));
        assert!(h.notifier.messages().is_empty());
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn mismatched_payload_is_decode_error_without_toast() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(envelope(200, "ok", json!("not a drink")))
            .mount(&mock_server)
            .await;

        let h = harness(Config::with_base_url(mock_server.uri()));
        let err = h.client.get::<DrinkStub>("/drinks/1").await.unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn concurrent_requests_resolve_independently() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/drinks/featured"))
            .respond_with(envelope(200, "ok", json!(["a"])).set_delay(Duration::from_millis(50)))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/drinks/popular"))
            .respond_with(envelope(500, "boom", json!(null)))
            .mount(&mock_server)
            .await;

        let h = harness(Config::with_base_url(mock_server.uri()));
        let (featured, popular) = tokio::join!(
            h.client.get::<Vec<String>>("/drinks/featured"),
            h.client.get::<Vec<String>>("/drinks/popular"),
        );

        assert_eq!(featured.unwrap(), vec!["a".to_string()]);
        assert_eq!(popular.unwrap_err().to_string(), "boom");
        assert_eq!(h.notifier.messages(), vec!["boom".to_string()]);
    }

    #[test]
    fn query_options_skip_nulls_and_flatten_arrays() {
        let options = RequestOptions::new()
            .query(&json!({"page": 1, "keyword": null, "tags": ["a", "b"], "hot": true}))
            .unwrap();

        let mut query = options.query;
        query.sort();
        assert_eq!(
            query,
            vec![
                ("hot".to_string(), "true".to_string()),
                ("page".to_string(), "1".to_string()),
                ("tags".to_string(), "a".to_string()),
                ("tags".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn query_options_reject_non_objects() {
        assert!(RequestOptions::new().query(&json!([1, 2])).is_err());
    }
}
