pub mod models;
pub mod operations;

pub use operations::{
    AdminOperations, CategoryOperations, CommentOperations, DrinkOperations, RecommendOperations,
    UploadOperations,
};
