//! Traits and interfaces between the crawl core and its collaborators

use anyhow::Result;
use async_trait::async_trait;

use crate::observer::CrawlEvent;

/// Status and body of a completed GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Transport used for every network call of a crawl
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue a single GET request
    ///
    /// # Arguments
    /// * `url` - Absolute URL to fetch
    ///
    /// # Returns
    /// * `Result<HttpResponse>` - The response, whatever its status, or a transport error
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for &T {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}

/// Sink for crawl progress, called by the core at every stage
pub trait CrawlObserver: Send + Sync {
    /// Record a single crawl event
    fn observe(&self, event: CrawlEvent);
}

impl<T: CrawlObserver + ?Sized> CrawlObserver for &T {
    fn observe(&self, event: CrawlEvent) {
        (**self).observe(event);
    }
}
