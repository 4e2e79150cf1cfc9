use tracing::info;

use crate::{
    api::models::{AdminInfo, LoginRequest, LoginResponse},
    client::ApiClient,
    error::ClientError,
};

/// 管理员接口
pub struct AdminOperations;

impl AdminOperations {
    /// 管理员登录，成功后保存令牌
    pub async fn login(
        client: &ApiClient,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ClientError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = client.post("/admin/login", &request).await?;

        client.tokens().set(&response.token)?;
        info!("管理员登录成功: {}", username);
        Ok(response)
    }

    /// 管理员登出；无论接口是否成功都会清除本地令牌
    pub async fn logout(client: &ApiClient) -> Result<String, ClientError> {
        let result = client.post_empty::<String>("/admin/logout").await;
        client.tokens().clear()?;
        info!("管理员已登出");
        result
    }

    /// 获取管理员信息
    pub async fn get_admin_info(client: &ApiClient) -> Result<AdminInfo, ClientError> {
        client.get("/admin/info").await
    }
}
