use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::lenient_datetime;

/// 酒品分类
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// 父分类ID，0 表示顶级分类
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub icon_url: Option<String>,
    /// 1-启用，0-禁用
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub update_time: Option<NaiveDateTime>,
    /// 分类树接口返回的子分类
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Category>,
}

impl Category {
    pub fn is_top_level(&self) -> bool {
        matches!(self.parent_id, None | Some(0))
    }
}
