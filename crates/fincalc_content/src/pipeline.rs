use tracing::info;

use fincalc_core::{ArticleStore, Result};
use fincalc_linker::AutoLinker;

#[derive(Debug, Clone)]
pub struct LinkReport {
    pub slug: String,
    pub links_added: usize,
}

/// Build-step pass that rewrites every stored article's content
/// through the auto-linker. Meta descriptions are left alone; they
/// feed `<meta>` tags where anchors make no sense.
pub struct LinkPipeline {
    linker: AutoLinker,
}

impl LinkPipeline {
    pub fn new(linker: AutoLinker) -> Self {
        Self { linker }
    }

    pub async fn run(&self, store: &dyn ArticleStore) -> Result<Vec<LinkReport>> {
        let articles = store.list_articles().await?;
        info!("🔗 Linking {} articles", articles.len());

        let mut reports = Vec::with_capacity(articles.len());
        for mut article in articles {
            let (content, links_added) = self.linker.rewrite_counting(&article.content);
            if links_added > 0 {
                article.content = content;
                store.store_article(&article).await?;
                info!("🔗 {}: {} links added", article.slug, links_added);
            }
            reports.push(LinkReport {
                slug: article.slug,
                links_added,
            });
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::memory::MemoryArticles;
    use chrono::Utc;
    use fincalc_core::{Article, InternalLink};
    use fincalc_linker::LinkTable;

    fn article(slug: &str, content: &str) -> Article {
        Article {
            slug: slug.to_string(),
            title: slug.to_string(),
            content: content.to_string(),
            category: None,
            meta_description: Some("SIP explained".to_string()),
            published_at: Utc::now(),
        }
    }

    fn pipeline() -> LinkPipeline {
        let table = LinkTable::new(vec![
            InternalLink::new("SIP", "/sip"),
            InternalLink::new("SIP Calculator", "/sip-calculator"),
        ])
        .unwrap();
        LinkPipeline::new(AutoLinker::new(table))
    }

    #[tokio::test]
    async fn rewrites_stored_content() {
        let store = MemoryArticles::with_articles(vec![article(
            "sip-basics",
            "<p>Start with the SIP Calculator.</p>",
        )])
        .await;

        let reports = pipeline().run(&store).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].links_added, 1);

        let updated = store.get_article("sip-basics").await.unwrap().unwrap();
        assert!(updated.content.contains(r#"<a href="/sip-calculator">SIP Calculator</a>"#));
        // meta description is not a link target
        assert_eq!(updated.meta_description.as_deref(), Some("SIP explained"));
    }

    #[tokio::test]
    async fn running_twice_changes_nothing() {
        let store = MemoryArticles::with_articles(vec![article(
            "sip-basics",
            "<p>SIP is simple.</p>",
        )])
        .await;

        let p = pipeline();
        p.run(&store).await.unwrap();
        let first = store.get_article("sip-basics").await.unwrap().unwrap();

        let reports = p.run(&store).await.unwrap();
        assert_eq!(reports[0].links_added, 0);
        let second = store.get_article("sip-basics").await.unwrap().unwrap();
        assert_eq!(first.content, second.content);
    }

    #[tokio::test]
    async fn unmatched_articles_are_untouched() {
        let store = MemoryArticles::with_articles(vec![article(
            "gold-rates",
            "<p>Nothing to link here.</p>",
        )])
        .await;

        let reports = pipeline().run(&store).await.unwrap();
        assert_eq!(reports[0].links_added, 0);
    }
}
