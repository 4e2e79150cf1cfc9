mod storage;
mod token;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use token::{ADMIN_TOKEN_KEY, TokenStore};
