use crate::feed::traits::FeedSource;
use crate::model::FeedError;
use reqwest::Client;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

pub struct HttpFeed {
    client: Client,
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent("PriceSheet/0.1")
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<Vec<Value>, FeedError> {
        info!("Fetching feed from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::InvalidResponse(response.status()));
        }

        Ok(response.json::<Vec<Value>>().await?)
    }
}

pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<Vec<Value>, FeedError> {
        info!("Reading feed from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// HTTP for `http://`/`https://` locations, local file otherwise.
pub fn feed_from_location(location: &str) -> Result<Box<dyn FeedSource>, FeedError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpFeed::new(location)?))
    } else {
        Ok(Box::new(FileFeed::new(location)))
    }
}
