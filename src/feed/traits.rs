use crate::model::FeedError;
use serde_json::Value;

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Retrieves the raw feed items. One attempt, no retry.
    async fn fetch(&self) -> Result<Vec<Value>, FeedError>;
}
