use serde::{Deserialize, Serialize};

use crate::utils::lenient_u64;

/// 允许上传的图片扩展名
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
/// 单个文件上限 10MB
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    /// 字节数，后端以字符串返回
    #[serde(default, deserialize_with = "lenient_u64")]
    pub size: Option<u64>,
}
