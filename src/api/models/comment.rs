use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::PageQuery;
use crate::utils::lenient_datetime;

/// 留言
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    /// 用户昵称
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub content: String,
    /// default / hot / latest
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub like_count: Option<i32>,
    #[serde(default)]
    pub reply_count: Option<i32>,
    #[serde(default)]
    pub is_pinned: Option<bool>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub create_time: Option<NaiveDateTime>,
}

/// 留言回复
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: i64,
    #[serde(default)]
    pub comment_id: Option<i64>,
    /// 父回复ID，0 表示直接回复留言
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub create_time: Option<NaiveDateTime>,
}

/// 留言列表查询
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub nickname: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReply {
    pub nickname: String,
    pub content: String,
}
