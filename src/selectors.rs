//! CSS selectors for the books.toscrape.com markup

use anyhow::{Result, anyhow};
use scraper::Selector;

/// Parsed selectors for every page type of the catalog
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    /// Side navigation holding the category links
    pub nav_list: Selector,
    /// Product summary entries on a listing page
    pub product_pod: Selector,
    /// Any link
    pub link: Selector,
    /// Next-page control on a listing page
    pub next_page: Selector,
    /// Product title
    pub title: Selector,
    /// Header cells of the product information table
    pub table_header: Selector,
    /// Container preceding the description paragraph
    pub description: Selector,
    /// Breadcrumb trail
    pub breadcrumb: Selector,
    /// Rating paragraph, the rating is its second class
    pub star_rating: Selector,
    /// Product image
    pub image: Selector,
}

impl SiteSelectors {
    pub fn books_to_scrape() -> Result<Self> {
        Ok(Self {
            nav_list: parse("ul.nav-list")?,
            product_pod: parse("article.product_pod")?,
            link: parse("a")?,
            next_page: parse("li.next")?,
            title: parse("h1")?,
            table_header: parse("th")?,
            description: parse("div#product_description")?,
            breadcrumb: parse("ul.breadcrumb")?,
            star_rating: parse("p.star-rating")?,
            image: parse("img")?,
        })
    }
}

fn parse(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Failed to parse selector {css}: {:?}", e))
}
