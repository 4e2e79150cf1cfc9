pub mod admin;
pub mod category;
pub mod comment;
pub mod common;
pub mod drink;
pub mod recommend;
pub mod upload;

pub use admin::{AdminInfo, LoginRequest, LoginResponse};
pub use category::Category;
pub use comment::{Comment, CommentQuery, NewComment, NewReply, Reply};
pub use common::{Page, PageQuery};
pub use drink::{Drink, DrinkQuery};
pub use recommend::{Feedback, Question, QuestionOption, RecommendationRequest, RecommendationResult};
pub use upload::UploadedImage;
