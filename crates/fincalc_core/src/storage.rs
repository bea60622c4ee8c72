use async_trait::async_trait;
use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Store an article, replacing any existing article with the same slug
    async fn store_article(&self, article: &Article) -> Result<()>;

    /// Get a single article by slug
    async fn get_article(&self, slug: &str) -> Result<Option<Article>>;

    /// Get all articles, most recently published first
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Get all articles in a specific category
    async fn get_by_category(&self, category: &str) -> Result<Vec<Article>>;

    /// Remove an article by slug
    async fn delete_article(&self, slug: &str) -> Result<()>;
}

/// Monotonic counters (page view tracking) behind an atomic
/// read-modify-write seam, so callers never touch the backing
/// store directly.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increment a counter and return the new value
    async fn increment(&self, key: &str) -> Result<u64>;

    /// Current value of a counter, 0 if never incremented
    async fn get(&self, key: &str) -> Result<u64>;

    /// All counters as (key, value) pairs
    async fn snapshot(&self) -> Result<Vec<(String, u64)>>;
}
