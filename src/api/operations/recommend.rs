use serde_json::Value;

use crate::{
    api::models::{Feedback, Question, RecommendationRequest, RecommendationResult},
    client::ApiClient,
    error::ClientError,
};

/// “今天喝什么”推荐接口
pub struct RecommendOperations;

impl RecommendOperations {
    /// 获取推荐问题
    pub async fn get_questions(client: &ApiClient) -> Result<Vec<Question>, ClientError> {
        client.get("/recommend/questions").await
    }

    /// 提交所选选项ID，获取推荐结果
    pub async fn get_recommendation(
        client: &ApiClient,
        answers: &[i64],
    ) -> Result<RecommendationResult, ClientError> {
        let request = RecommendationRequest {
            answers: answers.to_vec(),
        };
        client.post("/recommend/result", &request).await
    }

    pub async fn get_recommendation_detail(
        client: &ApiClient,
        id: i64,
    ) -> Result<Value, ClientError> {
        client.get(&format!("/recommend/result/{}", id)).await
    }

    /// 提交推荐反馈
    pub async fn submit_feedback(
        client: &ApiClient,
        feedback: &Feedback,
    ) -> Result<String, ClientError> {
        client.post("/recommend/feedback", feedback).await
    }
}
