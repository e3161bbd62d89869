//! Search service: filter the message collection and cut one page out of it.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::{Message, Pagination, SearchConfig, SearchPage};
use crate::domain::ports::MessageSource;

/// Case-insensitive substring search over message text with pagination.
///
/// Results are the text of each matching message, in upstream order. An empty
/// or absent query matches every message that has text.
pub struct SearchService<S: MessageSource> {
    source: Arc<S>,
    config: SearchConfig,
}

impl<S: MessageSource> SearchService<S> {
    /// Create a search service over `source`.
    pub fn new(source: Arc<S>, config: SearchConfig) -> Self {
        Self { source, config }
    }

    /// Run a search.
    ///
    /// `page` defaults to 1 and `page_size` to the configured default.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: Option<&str>,
        page: Option<usize>,
        page_size: Option<usize>,
    ) -> DomainResult<SearchPage> {
        let started = Instant::now();

        let pagination = Pagination::new(
            page.unwrap_or(1),
            page_size.unwrap_or(self.config.default_page_size),
            self.config.max_page_size,
        )?;

        let messages = self.source.fetch_all().await?;
        let matches = filter_messages(&messages, query.unwrap_or_default());
        let page = pagination.apply(matches)?;
        let response = SearchPage::from_page(page, pagination);

        info!(
            total = response.total,
            page = response.page,
            total_pages = response.total_pages,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "search completed"
        );

        Ok(response)
    }
}

/// Collect the text of every message whose text contains `query`,
/// ignoring case. Messages without text never match.
pub fn filter_messages(messages: &[Message], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut without_text = 0usize;

    let matches: Vec<String> = messages
        .iter()
        .filter_map(|message| {
            let Some(text) = message.text() else {
                without_text += 1;
                return None;
            };
            message
                .matches_lowercase(&needle)
                .then(|| text.to_string())
        })
        .collect();

    if without_text > 0 {
        debug!(without_text, "skipped messages without text");
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use async_trait::async_trait;

    struct FixedSource(Arc<Vec<Message>>);

    #[async_trait]
    impl MessageSource for FixedSource {
        async fn fetch_all(&self) -> DomainResult<Arc<Vec<Message>>> {
            Ok(Arc::clone(&self.0))
        }
    }

    struct DownSource;

    #[async_trait]
    impl MessageSource for DownSource {
        async fn fetch_all(&self) -> DomainResult<Arc<Vec<Message>>> {
            Err(DomainError::Upstream("503 Service Unavailable".to_string()))
        }
    }

    fn greetings() -> SearchService<FixedSource> {
        let messages = vec![
            Message::with_text("hello world"),
            Message::with_text("goodbye"),
            Message::with_text("Hello again"),
        ];
        SearchService::new(
            Arc::new(FixedSource(Arc::new(messages))),
            SearchConfig::default(),
        )
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let messages = vec![
            Message::with_text("Paris trip"),
            Message::with_text("PARIS again"),
            Message::with_text("London"),
        ];
        assert_eq!(
            filter_messages(&messages, "pArIs"),
            vec!["Paris trip", "PARIS again"]
        );
    }

    #[test]
    fn test_empty_query_returns_all_text() {
        let messages = vec![
            Message::with_text("one"),
            Message::default(),
            Message::with_text("two"),
        ];
        assert_eq!(filter_messages(&messages, ""), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_search_first_page() {
        let page = greetings().search(Some("hello"), Some(1), Some(10)).await.unwrap();
        assert_eq!(
            page,
            SearchPage {
                results: vec!["hello world".to_string(), "Hello again".to_string()],
                total: 2,
                page: 1,
                page_size: 10,
                total_pages: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_search_page_out_of_range() {
        let err = greetings().search(Some("hello"), Some(2), Some(10)).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::PageNotFound {
                page: 2,
                total_pages: 1
            }
        );
    }

    #[tokio::test]
    async fn test_search_defaults() {
        let page = greetings().search(None, None, None).await.unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
    }

    #[tokio::test]
    async fn test_search_no_matches_is_empty_page() {
        let page = greetings().search(Some("zebra"), Some(1), Some(5)).await.unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_search_propagates_upstream_error() {
        let service = SearchService::new(Arc::new(DownSource), SearchConfig::default());
        let err = service.search(Some("x"), None, None).await.unwrap_err();
        assert!(matches!(err, DomainError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_invalid_pagination_skips_fetch() {
        let service = SearchService::new(Arc::new(DownSource), SearchConfig::default());
        let err = service.search(None, Some(0), None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidPagination(_)));
    }
}
