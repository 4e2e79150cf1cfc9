use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::{
    api::models::{
        UploadedImage,
        upload::{ALLOWED_IMAGE_TYPES, MAX_FILE_SIZE},
    },
    client::ApiClient,
    error::ClientError,
};

/// 校验图片文件名与大小，返回对应的 MIME 类型
pub fn validate_image(file_name: &str, size: u64) -> Result<&'static str, ClientError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .filter(|e| ALLOWED_IMAGE_TYPES.contains(&e.as_str()))
        .ok_or_else(|| {
            ClientError::InvalidUpload(format!(
                "不支持的图片格式: {}，仅支持 {}",
                file_name,
                ALLOWED_IMAGE_TYPES.join("/")
            ))
        })?;

    if size == 0 {
        return Err(ClientError::InvalidUpload(format!("文件为空: {}", file_name)));
    }
    if size > MAX_FILE_SIZE {
        return Err(ClientError::InvalidUpload(format!(
            "文件大小超过 10MB: {}",
            file_name
        )));
    }

    Ok(match extension.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    })
}

fn image_part(file_name: &str, bytes: Vec<u8>) -> Result<Part, ClientError> {
    let mime = validate_image(file_name, bytes.len() as u64)?;
    Ok(Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)?)
}

async fn read_image(path: &Path) -> Result<(String, Vec<u8>), ClientError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ClientError::InvalidUpload(format!("无效的文件路径: {}", path.display())))?
        .to_string();

    // 先按元数据校验，避免把超大文件读进内存
    let metadata = tokio::fs::metadata(path).await?;
    validate_image(&file_name, metadata.len())?;

    let bytes = tokio::fs::read(path).await?;
    Ok((file_name, bytes))
}

/// 图片上传接口
pub struct UploadOperations;

impl UploadOperations {
    /// 上传单张图片（multipart 字段 `file`）
    pub async fn upload_image_bytes(
        client: &ApiClient,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ClientError> {
        let form = Form::new().part("file", image_part(file_name, bytes)?);
        client.post_multipart("/upload/image", form).await
    }

    pub async fn upload_image(
        client: &ApiClient,
        path: &Path,
    ) -> Result<UploadedImage, ClientError> {
        let (file_name, bytes) = read_image(path).await?;
        Self::upload_image_bytes(client, &file_name, bytes).await
    }

    /// 批量上传（multipart 字段 `files`），任一文件校验失败则不发送
    pub async fn upload_images(
        client: &ApiClient,
        paths: &[&Path],
    ) -> Result<Vec<UploadedImage>, ClientError> {
        let mut form = Form::new();
        for path in paths {
            let (file_name, bytes) = read_image(path).await?;
            form = form.part("files", image_part(&file_name, bytes)?);
        }
        client.post_multipart("/upload/images", form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_extensions_case_insensitively() {
        assert_eq!(validate_image("mojito.JPG", 10).unwrap(), "image/jpeg");
        assert_eq!(validate_image("bar.webp", 10).unwrap(), "image/webp");
        assert_eq!(validate_image("a.b.png", 10).unwrap(), "image/png");
    }

    #[test]
    fn rejects_bad_extension_size_and_empty_files() {
        assert!(matches!(
            validate_image("menu.pdf", 10),
            Err(ClientError::InvalidUpload(_))
        ));
        assert!(matches!(
            validate_image("noext", 10),
            Err(ClientError::InvalidUpload(_))
        ));
        assert!(validate_image("big.png", MAX_FILE_SIZE).is_ok());
        assert!(validate_image("big.png", MAX_FILE_SIZE + 1).is_err());
        assert!(validate_image("empty.png", 0).is_err());
    }
}
