use tracing::debug;

use super::table::RouteDescriptor;
use crate::cache::TokenStore;

/// 页面文档状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: Option<String>,
}

impl Document {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(String),
}

/// 全局前置守卫：设置标题，拦截未登录访问受保护页面
#[derive(Debug, Clone)]
pub struct RouteGuard {
    tokens: TokenStore,
    login_path: String,
}

impl RouteGuard {
    pub fn new(tokens: TokenStore, login_path: &str) -> Self {
        Self {
            tokens,
            login_path: login_path.to_string(),
        }
    }

    pub fn before_each(
        &self,
        to: &RouteDescriptor,
        from: Option<&RouteDescriptor>,
        document: &mut Document,
    ) -> GuardDecision {
        debug!(
            "路由守卫: {} -> {}",
            from.map(|r| r.path.as_str()).unwrap_or("-"),
            to.path
        );

        if let Some(title) = &to.meta.title {
            document.set_title(title);
        }

        if to.meta.requires_auth && !self.tokens.is_authenticated() {
            debug!("未登录访问 {}，跳转到 {}", to.path, self.login_path);
            return GuardDecision::Redirect(self.login_path.clone());
        }

        GuardDecision::Proceed
    }
}
