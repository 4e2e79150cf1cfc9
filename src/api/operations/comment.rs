use crate::{
    api::models::{Comment, CommentQuery, NewComment, NewReply, Page, Reply},
    client::{ApiClient, RequestOptions},
    error::ClientError,
};

/// 留言板接口
pub struct CommentOperations;

impl CommentOperations {
    pub async fn get_comments(
        client: &ApiClient,
        query: &CommentQuery,
    ) -> Result<Page<Comment>, ClientError> {
        let query = CommentQuery {
            page: query.page.normalized(),
            ..query.clone()
        };
        client
            .get_with("/comments", RequestOptions::new().query(&query)?)
            .await
    }

    /// 提交留言
    pub async fn submit_comment(
        client: &ApiClient,
        comment: &NewComment,
    ) -> Result<String, ClientError> {
        client.post("/comments", comment).await
    }

    /// 点赞留言
    pub async fn like_comment(client: &ApiClient, id: i64) -> Result<String, ClientError> {
        client.post_empty(&format!("/comments/{}/like", id)).await
    }

    /// 回复留言
    pub async fn reply_comment(
        client: &ApiClient,
        id: i64,
        reply: &NewReply,
    ) -> Result<String, ClientError> {
        client.post(&format!("/comments/{}/reply", id), reply).await
    }

    pub async fn get_comment_replies(
        client: &ApiClient,
        id: i64,
    ) -> Result<Vec<Reply>, ClientError> {
        client.get(&format!("/comments/{}/replies", id)).await
    }

    /// 获取热门留言
    pub async fn get_hot_comments(
        client: &ApiClient,
        limit: u32,
    ) -> Result<Vec<Comment>, ClientError> {
        client
            .get_with("/comments/hot", RequestOptions::new().param("limit", limit))
            .await
    }
}
