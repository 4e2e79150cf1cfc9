use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 推荐问卷题目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// single / multiple
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn is_multiple(&self) -> bool {
        self.question_type.as_deref() == Some("multiple")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: i64,
    #[serde(default)]
    pub question_id: Option<i64>,
    pub content: String,
    #[serde(default)]
    pub weight_value: Option<f64>,
    /// 标签关键词，逗号分隔
    #[serde(default)]
    pub tag_keywords: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRequest {
    pub answers: Vec<i64>,
}

/// 推荐结果；单条推荐内容由推荐算法决定，保持原样
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    #[serde(default)]
    pub recommendations: Vec<Value>,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(default)]
    pub algorithm_version: Option<String>,
}

/// 推荐反馈
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub log_id: i64,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
