use anyhow::Result;
use tracing::{error, info};

mod catalog_crawler;
mod config;
mod export;
mod extract;
#[cfg(test)]
mod fixtures;
mod http;
mod images;
mod listing;
mod logging;
mod models;
mod observer;
mod selectors;
mod traits;

use catalog_crawler::CatalogCrawler;
use config::CrawlerConfig;
use http::ReqwestFetcher;
use observer::TracingObserver;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = CrawlerConfig::from_env()?;
    logging::init(&config)?;

    info!("Starting books catalog crawl of {}", config.base_url);

    let crawler = CatalogCrawler::new(ReqwestFetcher::new()?, TracingObserver, config)?;

    match crawler.run().await {
        Ok(summary) => {
            info!("Wrote {} CSV files", summary.csv_files.len());
            Ok(())
        }
        Err(e) => {
            error!("Crawl aborted: {:#}", e);
            Err(e)
        }
    }
}
