//! Cached wrapper for MessageSource using moka TTL cache.
//!
//! Holds at most one snapshot of the upstream collection under a fixed key.
//! The snapshot is served until its TTL lapses, then replaced wholesale on
//! the next read. Concurrent misses share a single upstream fetch.

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{CacheEntry, Message};
use crate::domain::ports::MessageSource;

/// Key of the single cache slot.
pub const CACHE_KEY: &str = "all_messages";

/// Default TTL for the cached collection.
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Cached message source decorator.
///
/// Failed loads are never stored, so the next read retries the inner source.
pub struct CachedMessageSource<S: MessageSource> {
    inner: Arc<S>,
    entries: Cache<&'static str, Arc<CacheEntry>>,
}

impl<S: MessageSource + 'static> CachedMessageSource<S> {
    /// Create a cached source with the default 300s TTL.
    pub fn new(inner: Arc<S>) -> Self {
        Self::with_ttl(inner, Duration::from_secs(DEFAULT_TTL_SECS))
    }

    /// Create with custom TTL.
    pub fn with_ttl(inner: Arc<S>, ttl: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(1)
            .time_to_live(ttl)
            .build();

        Self { inner, entries }
    }

    /// The current snapshot, if one exists and is still fresh.
    pub async fn cached_entry(&self) -> Option<Arc<CacheEntry>> {
        self.entries.get(CACHE_KEY).await
    }

    /// Drop the current snapshot so the next read hits the inner source.
    pub async fn invalidate(&self) {
        self.entries.invalidate(CACHE_KEY).await;
    }
}

#[async_trait]
impl<S: MessageSource + 'static> MessageSource for CachedMessageSource<S> {
    async fn fetch_all(&self) -> DomainResult<Arc<Vec<Message>>> {
        if let Some(entry) = self.entries.get(CACHE_KEY).await {
            debug!(
                fetched_at = %entry.fetched_at,
                items = entry.items.len(),
                "message cache hit"
            );
            return Ok(Arc::clone(&entry.items));
        }

        let inner = Arc::clone(&self.inner);
        let entry = self
            .entries
            .try_get_with(CACHE_KEY, async move {
                debug!("message cache miss, fetching from upstream");
                let items = inner.fetch_all().await?;
                Ok::<_, DomainError>(Arc::new(CacheEntry::new(items)))
            })
            .await
            .map_err(|e: Arc<DomainError>| (*e).clone())?;

        Ok(Arc::clone(&entry.items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MessageSource for CountingSource {
        async fn fetch_all(&self) -> DomainResult<Arc<Vec<Message>>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            if self.fail {
                return Err(DomainError::Upstream("boom".to_string()));
            }
            Ok(Arc::new(vec![Message::with_text(format!("fetch {n}"))]))
        }
    }

    #[tokio::test]
    async fn test_second_read_within_ttl_is_served_from_cache() {
        let inner = Arc::new(CountingSource::new(false));
        let cached = CachedMessageSource::new(Arc::clone(&inner));

        let first = cached.fetch_all().await.unwrap();
        let second = cached.fetch_all().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(inner.calls(), 1);
        assert!(cached.cached_entry().await.is_some());
    }

    #[tokio::test]
    async fn test_read_after_ttl_refetches_once() {
        let inner = Arc::new(CountingSource::new(false));
        let cached = CachedMessageSource::with_ttl(Arc::clone(&inner), Duration::from_millis(150));

        cached.fetch_all().await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;

        let refreshed = cached.fetch_all().await.unwrap();
        assert_eq!(refreshed[0].text(), Some("fetch 1"));
        assert_eq!(inner.calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let inner = Arc::new(CountingSource::new(true));
        let cached = CachedMessageSource::new(Arc::clone(&inner));

        let err = cached.fetch_all().await.unwrap_err();
        assert_eq!(err, DomainError::Upstream("boom".to_string()));
        assert!(cached.cached_entry().await.is_none());

        cached.fetch_all().await.unwrap_err();
        assert_eq!(inner.calls(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_misses_share_one_fetch() {
        let inner = Arc::new(CountingSource::new(false));
        let cached = Arc::new(CachedMessageSource::new(Arc::clone(&inner)));

        let mut handles = vec![];
        for _ in 0..8 {
            let cached = Arc::clone(&cached);
            handles.push(tokio::spawn(async move { cached.fetch_all().await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(inner.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let inner = Arc::new(CountingSource::new(false));
        let cached = CachedMessageSource::new(Arc::clone(&inner));

        cached.fetch_all().await.unwrap();
        cached.invalidate().await;
        cached.fetch_all().await.unwrap();

        assert_eq!(inner.calls(), 2);
    }
}
