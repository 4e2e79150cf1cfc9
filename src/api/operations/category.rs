use crate::{
    api::models::Category,
    client::{ApiClient, RequestOptions},
    error::ClientError,
};

/// 酒品分类接口
pub struct CategoryOperations;

impl CategoryOperations {
    /// 获取所有启用的分类
    pub async fn get_categories(client: &ApiClient) -> Result<Vec<Category>, ClientError> {
        client.get("/categories").await
    }

    /// 获取顶级分类
    pub async fn get_top_categories(client: &ApiClient) -> Result<Vec<Category>, ClientError> {
        client.get("/categories/top").await
    }

    pub async fn get_child_categories(
        client: &ApiClient,
        parent_id: i64,
    ) -> Result<Vec<Category>, ClientError> {
        client
            .get(&format!("/categories/children/{}", parent_id))
            .await
    }

    pub async fn search_categories(
        client: &ApiClient,
        keyword: &str,
    ) -> Result<Vec<Category>, ClientError> {
        client
            .get_with(
                "/categories/search",
                RequestOptions::new().param("keyword", keyword),
            )
            .await
    }

    /// 获取分类树
    pub async fn get_category_tree(client: &ApiClient) -> Result<Vec<Category>, ClientError> {
        client.get("/categories/tree").await
    }

    pub async fn get_category_detail(client: &ApiClient, id: i64) -> Result<Category, ClientError> {
        client.get(&format!("/categories/{}", id)).await
    }
}
