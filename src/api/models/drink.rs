use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::PageQuery;
use crate::utils::lenient_datetime;

/// 酒品信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    /// 酒精度数(%)
    #[serde(default)]
    pub alcohol_content: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub taste_notes: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// 图片集合(JSON数组字符串)
    #[serde(default)]
    pub gallery_urls: Option<String>,
    /// 标签，逗号分隔
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub view_count: Option<i32>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub update_time: Option<NaiveDateTime>,
}

impl Drink {
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn gallery(&self) -> Vec<String> {
        self.gallery_urls
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }
}

/// 酒品列表查询
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}
