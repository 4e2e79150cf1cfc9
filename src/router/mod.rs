mod guard;
mod table;

use std::collections::HashMap;

use thiserror::Error;
use tracing::info;

pub use guard::{Document, GuardDecision, RouteGuard};
pub use table::{RouteDescriptor, RouteMatch, RouteMeta, RouteTable, RouteTableError, View};

use crate::cache::TokenStore;

/// 单次导航最多跟随的重定向次数
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("没有匹配的路由: {0}")]
    NotFound(String),
    #[error("重定向次数过多: {0}")]
    RedirectLoop(String),
}

/// 导航结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// 最初请求的路径
    pub requested: String,
    pub path: String,
    pub name: String,
    pub view: View,
    pub params: HashMap<String, String>,
    pub redirected: bool,
}

pub struct Router {
    table: RouteTable,
    guard: RouteGuard,
    document: Document,
    current: Option<Navigation>,
}

impl Router {
    pub fn new(table: RouteTable, tokens: TokenStore) -> Self {
        let guard = RouteGuard::new(tokens, table.login_path());
        Self {
            table,
            guard,
            document: Document::default(),
            current: None,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// 导航到指定路径，每一跳都经过守卫
    pub fn push(&mut self, path: &str) -> Result<Navigation, RouterError> {
        let from = self
            .current
            .as_ref()
            .and_then(|nav| self.table.by_name(&nav.name));

        let mut target = path.to_string();
        let mut redirected = false;

        for _ in 0..=MAX_REDIRECTS {
            let matched = self
                .table
                .resolve(&target)
                .ok_or_else(|| RouterError::NotFound(target.clone()))?;

            match self
                .guard
                .before_each(matched.route, from, &mut self.document)
            {
                GuardDecision::Proceed => {
                    let navigation = Navigation {
                        requested: path.to_string(),
                        path: matched.path,
                        name: matched.route.name.clone(),
                        view: matched.route.view,
                        params: matched.params,
                        redirected,
                    };
                    info!("导航至 {} ({})", navigation.path, navigation.name);
                    self.current = Some(navigation.clone());
                    return Ok(navigation);
                }
                GuardDecision::Redirect(next) => {
                    target = next;
                    redirected = true;
                }
            }
        }

        Err(RouterError::RedirectLoop(path.to_string()))
    }
}
