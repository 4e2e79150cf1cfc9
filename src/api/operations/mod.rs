mod admin;
mod category;
mod comment;
mod drink;
mod recommend;
mod upload;

pub use admin::AdminOperations;
pub use category::CategoryOperations;
pub use comment::CommentOperations;
pub use drink::DrinkOperations;
pub use recommend::RecommendOperations;
pub use upload::{UploadOperations, validate_image};
