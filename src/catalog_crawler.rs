use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::config::CrawlerConfig;
use crate::export::write_category_csv;
use crate::extract::extract_product;
use crate::images::{ImageOutcome, download_image};
use crate::listing::{parse_categories, parse_listing, resolve_product_href};
use crate::models::{CategoryLink, ProductRecord};
use crate::observer::CrawlEvent;
use crate::selectors::SiteSelectors;
use crate::traits::{CrawlObserver, Fetcher};

/// Totals of a finished run
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub started_at: DateTime<Utc>,
    pub categories: usize,
    pub products: usize,
    pub images_saved: usize,
    pub csv_files: Vec<PathBuf>,
}

/// A scraped product and what happened to its image
struct ScrapedProduct {
    record: ProductRecord,
    image: Option<ImageOutcome>,
}

/// Sequential crawler: categories, then their listing pages, then each product.
/// One request is in flight at any time.
pub struct CatalogCrawler<F, O> {
    fetcher: F,
    observer: O,
    selectors: SiteSelectors,
    config: CrawlerConfig,
}

impl<F: Fetcher, O: CrawlObserver> CatalogCrawler<F, O> {
    pub fn new(fetcher: F, observer: O, config: CrawlerConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            observer,
            selectors: SiteSelectors::books_to_scrape()?,
            config,
        })
    }

    /// Crawl every category and write one CSV per category.
    ///
    /// Each CSV is written only after its whole category has been crawled.
    pub async fn run(&self) -> Result<CrawlSummary> {
        let started_at = Utc::now();
        self.observer.observe(CrawlEvent::RunStarted {
            base_url: self.config.base_url.clone(),
        });

        let categories = self.list_categories().await?;
        let mut summary = CrawlSummary {
            started_at,
            categories: 0,
            products: 0,
            images_saved: 0,
            csv_files: Vec::new(),
        };

        for category in &categories {
            let (records, images_saved) = self.crawl_category(category).await?;

            let path = write_category_csv(&self.config.output_dir, category.folder_name(), &records)?;
            self.observer.observe(CrawlEvent::CsvWritten {
                path: path.clone(),
                rows: records.len(),
            });

            summary.categories += 1;
            summary.products += records.len();
            summary.images_saved += images_saved;
            summary.csv_files.push(path);
        }

        self.observer.observe(CrawlEvent::RunFinished {
            started_at: summary.started_at,
            categories: summary.categories,
            products: summary.products,
            images_saved: summary.images_saved,
        });
        Ok(summary)
    }

    /// Categories of the home page navigation. Any failure here is fatal.
    pub async fn list_categories(&self) -> Result<Vec<CategoryLink>> {
        let base_url = &self.config.base_url;
        let response = self
            .fetcher
            .get(base_url)
            .await
            .context("Failed to fetch site root")?;

        if !response.is_success() {
            return Err(anyhow::anyhow!(
                "Failed to fetch site root {}: status {}",
                base_url,
                response.status
            ));
        }

        let categories = parse_categories(&self.selectors, &response.text(), base_url)?;
        for category in &categories {
            self.observer.observe(CrawlEvent::CategoryListed {
                name: category.name.clone(),
                url: category.url.clone(),
            });
        }

        Ok(categories)
    }

    /// Follow the next-page chain of a category and scrape every product on it.
    ///
    /// There is no page limit: the crawl stops only when a page has no next link.
    ///
    /// # Returns
    /// * `Result<(Vec<ProductRecord>, usize)>` - Records in discovery order and the number of images saved
    pub async fn crawl_category(&self, category: &CategoryLink) -> Result<(Vec<ProductRecord>, usize)> {
        self.observer.observe(CrawlEvent::CategoryStarted {
            name: category.name.clone(),
        });

        let mut records = Vec::new();
        let mut images_saved = 0;
        let mut current_url = Some(category.url.clone());

        while let Some(page_url) = current_url {
            let html = self.fetch_page(&page_url).await?;
            let page = parse_listing(&self.selectors, &html, &page_url)?;
            self.observer.observe(CrawlEvent::ListingPage {
                url: page_url.clone(),
                products: page.product_hrefs.len(),
            });

            for href in &page.product_hrefs {
                let product_url = match resolve_product_href(href, &self.config.base_url) {
                    Ok(url) => url,
                    Err(e) => {
                        self.observer.observe(CrawlEvent::ProductSkipped {
                            target: href.clone(),
                            reason: e.to_string(),
                        });
                        continue;
                    }
                };

                if let Some(scraped) = self.scrape_product(&product_url).await? {
                    if matches!(scraped.image, Some(ImageOutcome::Saved(_))) {
                        images_saved += 1;
                    }
                    let mut record = scraped.record;
                    record.category = category.name.clone();
                    records.push(record);
                }
            }

            self.observer.observe(CrawlEvent::NextPage {
                next: page.next_page.clone(),
            });
            current_url = page.next_page;
        }

        Ok((records, images_saved))
    }

    /// Extract one product and download its image.
    ///
    /// The image folder is named after the breadcrumb category read from the
    /// page, before the caller replaces it with the crawl-time name.
    /// Returns `None` for a page that has no title.
    async fn scrape_product(&self, product_url: &str) -> Result<Option<ScrapedProduct>> {
        let html = self.fetch_page(product_url).await?;

        let record = match extract_product(
            &self.selectors,
            &html,
            product_url,
            &self.config.base_url,
            &self.observer,
        ) {
            Ok(record) => record,
            Err(e) => {
                self.observer.observe(CrawlEvent::ProductSkipped {
                    target: product_url.to_string(),
                    reason: e.to_string(),
                });
                return Ok(None);
            }
        };

        let image = match record.image() {
            Some(image_url) => Some(
                download_image(
                    &self.fetcher,
                    &self.observer,
                    image_url,
                    &self.config.output_dir,
                    &record.category,
                )
                .await,
            ),
            None => None,
        };

        Ok(Some(ScrapedProduct { record, image }))
    }

    /// GET a listing or product page. Error statuses are logged and the body is still used.
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.fetcher.get(url).await?;

        if !response.is_success() {
            self.observer.observe(CrawlEvent::PageStatus {
                url: url.to_string(),
                status: response.status,
            });
        }

        Ok(response.text())
    }
}
