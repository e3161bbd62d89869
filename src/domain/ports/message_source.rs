//! Message source port.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::Message;

/// Anything that can hand out the full message collection.
///
/// Implemented by the upstream HTTP client and by the caching decorator
/// that wraps it.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Fetch the complete collection in upstream order.
    async fn fetch_all(&self) -> DomainResult<Arc<Vec<Message>>>;
}

#[async_trait]
impl<S: MessageSource + ?Sized> MessageSource for Arc<S> {
    async fn fetch_all(&self) -> DomainResult<Arc<Vec<Message>>> {
        (**self).fetch_all().await
    }
}
