use crate::{
    api::models::{Drink, DrinkQuery, Page, PageQuery},
    client::{ApiClient, RequestOptions},
    error::ClientError,
    utils::encode_segment,
};

/// 酒品接口
pub struct DrinkOperations;

impl DrinkOperations {
    /// 获取酒品列表（分页）
    pub async fn get_drinks(
        client: &ApiClient,
        query: &DrinkQuery,
    ) -> Result<Page<Drink>, ClientError> {
        let query = DrinkQuery {
            page: query.page.normalized(),
            ..query.clone()
        };
        client
            .get_with("/drinks", RequestOptions::new().query(&query)?)
            .await
    }

    pub async fn get_drink_detail(client: &ApiClient, id: i64) -> Result<Drink, ClientError> {
        client.get(&format!("/drinks/{}", id)).await
    }

    /// 搜索酒品，默认第 1 页、每页 10 条
    pub async fn search_drinks(
        client: &ApiClient,
        keyword: &str,
        page: Option<PageQuery>,
    ) -> Result<Page<Drink>, ClientError> {
        let page = page.unwrap_or_default().normalized();
        let options = RequestOptions::new()
            .param("keyword", keyword)
            .param("page", page.page.unwrap_or(1))
            .param("size", page.size.unwrap_or(10));
        client.get_with("/drinks/search", options).await
    }

    /// 获取推荐酒品
    pub async fn get_featured_drinks(client: &ApiClient) -> Result<Vec<Drink>, ClientError> {
        client.get("/drinks/featured").await
    }

    /// 获取热门酒品
    pub async fn get_popular_drinks(client: &ApiClient) -> Result<Vec<Drink>, ClientError> {
        client.get("/drinks/popular").await
    }

    pub async fn get_drinks_by_tag(
        client: &ApiClient,
        tag: &str,
    ) -> Result<Page<Drink>, ClientError> {
        client
            .get(&format!("/drinks/tag/{}", encode_segment(tag)))
            .await
    }

    pub async fn get_drinks_by_price_range(
        client: &ApiClient,
        min_price: f64,
        max_price: f64,
    ) -> Result<Page<Drink>, ClientError> {
        let options = RequestOptions::new()
            .param("minPrice", min_price)
            .param("maxPrice", max_price);
        client.get_with("/drinks/price-range", options).await
    }

    /// 获取分类下的酒品数量
    pub async fn get_drink_count_by_category(
        client: &ApiClient,
        category_id: i64,
    ) -> Result<u64, ClientError> {
        client
            .get(&format!("/drinks/count/category/{}", category_id))
            .await
    }
}
