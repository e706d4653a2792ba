//! Crawl events and the default observer that logs them through `tracing`

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use tracing::{info, warn};

use crate::traits::CrawlObserver;

/// Something that happened during a crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// A run is starting at the site root
    RunStarted { base_url: String },
    /// Crawling of a category begins
    CategoryStarted { name: String },
    /// A category was read from the site navigation
    CategoryListed { name: String, url: String },
    /// A listing page was fetched
    ListingPage { url: String, products: usize },
    /// A listing or product page answered with a non-success status
    PageStatus { url: String, status: u16 },
    /// A product field was extracted, or replaced by its sentinel
    Field { name: &'static str, found: bool },
    /// A product link or page could not be turned into a record
    ProductSkipped { target: String, reason: String },
    /// Pagination either continues at `next` or ends
    NextPage { next: Option<String> },
    /// An image was written to disk
    ImageSaved { name: String, path: PathBuf },
    /// An image request or write failed
    ImageFailed { url: String, reason: String },
    /// A category CSV was written
    CsvWritten { path: PathBuf, rows: usize },
    /// Every category was written
    RunFinished {
        started_at: DateTime<Utc>,
        categories: usize,
        products: usize,
        images_saved: usize,
    },
}

/// Observer writing every event to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn observe(&self, event: CrawlEvent) {
        match event {
            CrawlEvent::RunStarted { base_url } => info!("Launching the script for {}", base_url),
            CrawlEvent::CategoryStarted { name } => info!("Crawling category {}", name.trim()),
            CrawlEvent::CategoryListed { name, url } => {
                info!("Category added to list: {} ({})", name.trim(), url);
            }
            CrawlEvent::ListingPage { url, products } => {
                info!("Listing page {} has {} products", url, products);
            }
            CrawlEvent::PageStatus { url, status } => {
                warn!("Page {} answered with status {}", url, status);
            }
            CrawlEvent::Field { name, found: true } => info!("{} ok", name),
            CrawlEvent::Field { name, found: false } => info!("{} NA", name),
            CrawlEvent::ProductSkipped { target, reason } => {
                warn!("Skipping product {}: {}", target, reason);
            }
            CrawlEvent::NextPage { next: Some(url) } => info!("Next page ok: {}", url),
            CrawlEvent::NextPage { next: None } => info!("Next page NA"),
            CrawlEvent::ImageSaved { name, path } => {
                info!("Image {} saved to {}", name, path.display());
            }
            CrawlEvent::ImageFailed { url, reason } => {
                warn!("Image request for {} failed: {}", url, reason);
            }
            CrawlEvent::CsvWritten { path, rows } => {
                info!("Wrote {} products to {}", rows, path.display());
            }
            CrawlEvent::RunFinished {
                started_at,
                categories,
                products,
                images_saved,
            } => info!(
                "Crawl started at {} finished: {} categories, {} products, {} images",
                started_at.to_rfc3339(),
                categories,
                products,
                images_saved
            ),
        }
    }
}
