use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use fincalc_core::{Article, ArticleStore, CounterStore, Result};

/// In-memory article store keyed by slug.
#[derive(Default)]
pub struct MemoryArticles {
    articles: RwLock<HashMap<String, Article>>,
}

impl MemoryArticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_articles(articles: Vec<Article>) -> Self {
        let store = Self::new();
        {
            let mut map = store.articles.write().await;
            for article in articles {
                map.insert(article.slug.clone(), article);
            }
        }
        store
    }
}

#[async_trait]
impl ArticleStore for MemoryArticles {
    async fn store_article(&self, article: &Article) -> Result<()> {
        let mut articles = self.articles.write().await;
        articles.insert(article.slug.clone(), article.clone());
        Ok(())
    }

    async fn get_article(&self, slug: &str) -> Result<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.get(slug).cloned())
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        let articles = self.articles.read().await;
        let mut all: Vec<Article> = articles.values().cloned().collect();
        all.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(all)
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Article>> {
        let articles = self.articles.read().await;
        Ok(articles
            .values()
            .filter(|a| a.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }

    async fn delete_article(&self, slug: &str) -> Result<()> {
        let mut articles = self.articles.write().await;
        articles.remove(slug);
        Ok(())
    }
}

/// In-memory counter store. The single write lock makes every
/// increment an atomic read-modify-write.
#[derive(Default)]
pub struct MemoryCounters {
    counters: RwLock<HashMap<String, u64>>,
}

impl MemoryCounters {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryCounters {
    async fn increment(&self, key: &str) -> Result<u64> {
        let mut counters = self.counters.write().await;
        let value = counters.entry(key.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }

    async fn get(&self, key: &str) -> Result<u64> {
        let counters = self.counters.read().await;
        Ok(counters.get(key).copied().unwrap_or(0))
    }

    async fn snapshot(&self) -> Result<Vec<(String, u64)>> {
        let counters = self.counters.read().await;
        let mut all: Vec<(String, u64)> = counters
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        all.sort();
        Ok(all)
    }
}
