use std::collections::{HashMap, HashSet};

use thiserror::Error;

/// 路由对应的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Drinks,
    DrinkDetail,
    Comments,
    Recommend,
    About,
    AdminLogin,
    AdminDashboard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: Option<String>,
    pub requires_auth: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    pub view: View,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    pub fn new(path: &str, name: &str, view: View) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            view,
            meta: RouteMeta::default(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.meta.title = Some(title.to_string());
        self
    }

    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    /// 路径匹配，成功时返回 `:param` 参数
    fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let pattern = segments(&self.path);
        let target = segments(path);
        if pattern.len() != target.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (expected, actual) in pattern.iter().zip(target.iter()) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), actual.to_string());
                }
                None if expected == actual => {}
                None => return None,
            }
        }
        Some(params)
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// 去掉查询串和锚点
fn strip_suffix(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("路由路径必须以 / 开头: {0}")]
    InvalidPath(String),
    #[error("路由路径重复: {0}")]
    DuplicatePath(String),
    #[error("路由名称重复: {0}")]
    DuplicateName(String),
    #[error("登录路由不存在: {0}")]
    MissingLoginRoute(String),
    #[error("登录路由不能要求登录: {0}")]
    ProtectedLoginRoute(String),
}

fn validate(routes: &[RouteDescriptor]) -> Result<(), RouteTableError> {
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for route in routes {
        if !route.path.starts_with('/') {
            return Err(RouteTableError::InvalidPath(route.path.clone()));
        }
        // `:id` 与 `:slug` 视为同一模式
        let pattern: Vec<&str> = segments(&route.path)
            .into_iter()
            .map(|s| if s.starts_with(':') { ":" } else { s })
            .collect();
        if !paths.insert(pattern) {
            return Err(RouteTableError::DuplicatePath(route.path.clone()));
        }
        if !names.insert(route.name.as_str()) {
            return Err(RouteTableError::DuplicateName(route.name.clone()));
        }
    }
    Ok(())
}

/// 一次成功的路径匹配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteDescriptor,
    pub path: String,
    pub params: HashMap<String, String>,
}

/// 已校验的路由表
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    login_path: String,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>, login_path: &str) -> Result<Self, RouteTableError> {
        validate(&routes)?;

        let table = Self {
            routes,
            login_path: login_path.to_string(),
        };

        let login_protected = table
            .resolve(login_path)
            .map(|login| login.route.meta.requires_auth)
            .ok_or_else(|| RouteTableError::MissingLoginRoute(login_path.to_string()))?;
        if login_protected {
            return Err(RouteTableError::ProtectedLoginRoute(login_path.to_string()));
        }

        Ok(table)
    }

    /// 站点路由表
    pub fn wildnest() -> Result<Self, RouteTableError> {
        Self::new(
            vec![
                RouteDescriptor::new("/", "home", View::Home).title("WildNest 酒吧"),
                RouteDescriptor::new("/drinks", "drinks", View::Drinks).title("酒单"),
                RouteDescriptor::new("/drinks/:id", "drink-detail", View::DrinkDetail)
                    .title("酒品详情"),
                RouteDescriptor::new("/comments", "comments", View::Comments).title("留言板"),
                RouteDescriptor::new("/recommend", "recommend", View::Recommend)
                    .title("今天喝什么"),
                RouteDescriptor::new("/about", "about", View::About).title("关于酒吧"),
                RouteDescriptor::new("/admin", "admin", View::AdminLogin).title("管理员登录"),
                RouteDescriptor::new("/admin/dashboard", "admin-dashboard", View::AdminDashboard)
                    .title("管理后台")
                    .requires_auth(),
            ],
            "/admin",
        )
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// 按声明顺序取第一个匹配的路由
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = strip_suffix(path);
        self.routes.iter().find_map(|route| {
            route.matches(path).map(|params| RouteMatch {
                route,
                path: path.to_string(),
                params,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let table = RouteTable::wildnest().unwrap();
        assert_eq!(table.routes().len(), 8);
        assert_eq!(table.login_path(), "/admin");
        assert!(table.by_name("admin-dashboard").unwrap().meta.requires_auth);
        assert!(!table.by_name("admin").unwrap().meta.requires_auth);
    }

    #[test]
    fn resolves_static_and_param_routes() {
        let table = RouteTable::wildnest().unwrap();

        assert_eq!(table.resolve("/").unwrap().route.name, "home");
        assert_eq!(table.resolve("/drinks/").unwrap().route.name, "drinks");

        let detail = table.resolve("/drinks/42?from=home").unwrap();
        assert_eq!(detail.route.name, "drink-detail");
        assert_eq!(detail.path, "/drinks/42");
        assert_eq!(detail.params.get("id").map(String::as_str), Some("42"));

        assert!(table.resolve("/drinks/42/reviews").is_none());
        assert!(table.resolve("/nope").is_none());
    }

    #[test]
    fn rejects_duplicate_names_and_paths() {
        let err = RouteTable::new(
            vec![
                RouteDescriptor::new("/admin", "admin", View::AdminLogin),
                RouteDescriptor::new("/about", "admin", View::About),
            ],
            "/admin",
        )
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicateName("admin".into()));

        let err = RouteTable::new(
            vec![
                RouteDescriptor::new("/admin", "admin", View::AdminLogin),
                RouteDescriptor::new("/drinks/:id", "a", View::DrinkDetail),
                RouteDescriptor::new("/drinks/:slug", "b", View::DrinkDetail),
            ],
            "/admin",
        )
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicatePath("/drinks/:slug".into()));
    }

    #[test]
    fn rejects_missing_or_protected_login_route() {
        let err = RouteTable::new(vec![RouteDescriptor::new("/", "home", View::Home)], "/admin")
            .unwrap_err();
        assert_eq!(err, RouteTableError::MissingLoginRoute("/admin".into()));

        let err = RouteTable::new(
            vec![RouteDescriptor::new("/admin", "admin", View::AdminLogin).requires_auth()],
            "/admin",
        )
        .unwrap_err();
        assert_eq!(err, RouteTableError::ProtectedLoginRoute("/admin".into()));
    }

    #[test]
    fn rejects_relative_paths() {
        let err = RouteTable::new(vec![RouteDescriptor::new("admin", "admin", View::AdminLogin)], "/admin")
            .unwrap_err();
        assert_eq!(err, RouteTableError::InvalidPath("admin".into()));
    }
}
