// 通用的数据结构定义

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// 分页查询参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// 页码至少为 1，每页数量限制在 1..=100
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.map(|p| p.max(1)),
            size: self.size.map(|s| s.clamp(1, MAX_PAGE_SIZE)),
        }
    }
}

/// 分页结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// 数据列表
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    /// 总记录数
    #[serde(default)]
    pub total: u64,
    /// 每页数量
    #[serde(default)]
    pub size: u64,
    /// 当前页码
    #[serde(default)]
    pub current: u64,
    /// 总页数
    #[serde(default)]
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.current < self.pages
    }
}
