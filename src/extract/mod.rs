//! Best-effort field extraction from a product detail page.
//!
//! Every field is looked up on its own; markup missing for one field puts
//! its sentinel in the record and never affects the others.

use anyhow::{Result, bail};
use scraper::{ElementRef, Html};

use crate::models::{CATEGORY_SENTINEL, ProductRecord, SENTINEL};
use crate::observer::CrawlEvent;
use crate::selectors::SiteSelectors;
use crate::traits::CrawlObserver;

/// Leading characters of the availability text, `"In stock ("`
const AVAILABILITY_PREFIX_LEN: usize = 10;

/// Leading characters of an image `src`, `"../../"`
const IMAGE_PREFIX_LEN: usize = 6;

/// Build a record from a product page.
///
/// `category` holds the breadcrumb value; the crawler replaces it with the
/// crawl-time category name afterwards.
///
/// # Arguments
/// * `html` - The product page markup
/// * `page_url` - Absolute URL the page was fetched from
/// * `base_url` - Site root, ending with `/`
///
/// # Returns
/// * `Result<ProductRecord>` - The record, or an error when the page has no title
pub fn extract_product(
    selectors: &SiteSelectors,
    html: &str,
    page_url: &str,
    base_url: &str,
    observer: &dyn CrawlObserver,
) -> Result<ProductRecord> {
    let document = Html::parse_document(html);

    let Some(title) = document.select(&selectors.title).next().map(text_of) else {
        bail!("product page has no title");
    };

    let field = |name: &'static str, value: Option<String>| -> String {
        observer.observe(CrawlEvent::Field {
            name,
            found: value.is_some(),
        });
        value.unwrap_or_else(|| SENTINEL.to_string())
    };

    let upc = field("upc", table_value(selectors, &document, "UPC"));
    let price_excluding_tax = field(
        "price_excluding_tax",
        table_value(selectors, &document, "Price (excl. tax)").map(|raw| strip_price(&raw)),
    );
    let price_including_tax = field(
        "price_including_tax",
        table_value(selectors, &document, "Price (incl. tax)").map(|raw| strip_price(&raw)),
    );
    let number_available = field(
        "number_available",
        table_value(selectors, &document, "Availability").map(|raw| strip_availability(&raw)),
    );
    let product_description = field("product_description", description(selectors, &document));
    let review_rating = field("review_rating", review_rating(selectors, &document));
    let image_url = field("image_url", image_url(selectors, &document, base_url));

    let breadcrumb = breadcrumb_category(selectors, &document);
    observer.observe(CrawlEvent::Field {
        name: "category",
        found: breadcrumb.is_some(),
    });
    let category = breadcrumb.unwrap_or_else(|| CATEGORY_SENTINEL.to_string());

    Ok(ProductRecord {
        product_page_url: page_url.to_string(),
        upc,
        title,
        price_excluding_tax,
        price_including_tax,
        number_available,
        product_description,
        category,
        review_rating,
        image_url,
    })
}

/// Drop the currency symbol, `"£51.77"` becomes `"51.77"`
pub fn strip_price(raw: &str) -> String {
    drop_chars(raw, 1).to_string()
}

/// Keep the stock count, `"In stock (22 available)"` becomes `"22 available)"`
pub fn strip_availability(raw: &str) -> String {
    drop_chars(raw.trim(), AVAILABILITY_PREFIX_LEN).to_string()
}

/// Remove the first `n` characters, counted as chars rather than bytes
pub fn drop_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(i, _)| &s[i..])
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Value cell next to the information table header labelled `label`
fn table_value(selectors: &SiteSelectors, document: &Html, label: &str) -> Option<String> {
    let header = document
        .select(&selectors.table_header)
        .find(|th| th.text().collect::<String>() == label)?;

    next_sibling_named(header, "td").map(text_of)
}

fn description(selectors: &SiteSelectors, document: &Html) -> Option<String> {
    let container = document.select(&selectors.description).next()?;
    next_sibling_named(container, "p").map(text_of)
}

/// Third breadcrumb link, the first two being Home and Books
fn breadcrumb_category(selectors: &SiteSelectors, document: &Html) -> Option<String> {
    let breadcrumb = document.select(&selectors.breadcrumb).next()?;
    let link = breadcrumb.select(&selectors.link).nth(2)?;
    Some(text_of(link).trim().to_string())
}

/// Second class token of the rating paragraph, e.g. `Three` in `star-rating Three`
fn review_rating(selectors: &SiteSelectors, document: &Html) -> Option<String> {
    let rating = document.select(&selectors.star_rating).next()?;
    let class = rating.value().attr("class")?;
    class.split_whitespace().nth(1).map(str::to_string)
}

fn image_url(selectors: &SiteSelectors, document: &Html, base_url: &str) -> Option<String> {
    let src = document.select(&selectors.image).next()?.value().attr("src")?;
    let path = drop_chars(src, IMAGE_PREFIX_LEN);
    if path.is_empty() {
        return None;
    }
    Some(format!("{base_url}{path}"))
}

fn next_sibling_named<'a>(element: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == name)
}
