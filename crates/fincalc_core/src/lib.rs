pub mod error;
pub mod storage;
pub mod types;

pub use error::Error;
pub use storage::{ArticleStore, CounterStore};
pub use types::{Article, InternalLink};
pub type Result<T> = std::result::Result<T, Error>;
