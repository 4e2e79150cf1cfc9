mod auth;
mod error_handler;
mod notify;

use std::sync::Arc;

pub use auth::BearerAuth;
pub use error_handler::{ResponseInterceptor, transport_message};
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};

use crate::error::ClientError;

/// 请求阶段：发送前对请求做修改，返回错误则请求不会发出
pub trait RequestStage: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, request: &mut reqwest::Request) -> Result<(), ClientError>;
}

/// 按注册顺序依次执行的请求阶段
#[derive(Clone, Default)]
pub struct RequestPipeline {
    stages: Vec<Arc<dyn RequestStage>>,
}

impl RequestPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stage(mut self, stage: impl RequestStage + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn run(&self, request: &mut reqwest::Request) -> Result<(), ClientError> {
        for stage in &self.stages {
            stage.apply(request).inspect_err(|e| {
                tracing::warn!("请求阶段 {} 失败: {}", stage.name(), e);
            })?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for RequestPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.stages.iter().map(|s| s.name()))
            .finish()
    }
}
