//! Data models for crawled products and catalog navigation

use serde::Serialize;

/// Placeholder for a field whose markup was not found on the product page
pub const SENTINEL: &str = " N/A ";

/// Placeholder for a missing breadcrumb category.
///
/// Differs from [`SENTINEL`]; existing CSV consumers rely on the bare form.
pub const CATEGORY_SENTINEL: &str = "NA";

/// Header row of every category CSV, in column order
pub const CSV_HEADERS: [&str; 11] = [
    "product_page_url",
    "upc",
    "title",
    "price_including_tax",
    "price_excluding_tax",
    "number_available",
    "product_description",
    "category",
    "review_rating",
    "image_url",
    "category_url",
];

/// A product scraped from a catalog detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub product_page_url: String,
    pub upc: String,
    pub title: String,
    pub price_excluding_tax: String,
    pub price_including_tax: String,
    pub number_available: String,
    pub product_description: String,
    pub category: String,
    pub review_rating: String,
    pub image_url: String,
}

impl ProductRecord {
    /// Resolved image URL, `None` when the page had no usable image
    pub fn image(&self) -> Option<&str> {
        (self.image_url != SENTINEL).then_some(self.image_url.as_str())
    }
}

/// A category entry from the site navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    /// Raw link text, surrounding whitespace included
    pub name: String,
    /// Absolute URL of the first listing page
    pub url: String,
}

impl CategoryLink {
    /// Name used for the output folder and CSV file
    pub fn folder_name(&self) -> &str {
        self.name.trim()
    }
}

/// One CSV row, fields ordered as in [`CSV_HEADERS`]
#[derive(Debug, Serialize)]
pub struct CsvRow<'a> {
    pub product_page_url: &'a str,
    pub upc: &'a str,
    pub title: &'a str,
    pub price_including_tax: &'a str,
    pub price_excluding_tax: &'a str,
    pub number_available: &'a str,
    pub product_description: &'a str,
    pub category: &'a str,
    pub review_rating: &'a str,
    pub image_url: &'a str,
    /// Never populated
    pub category_url: &'a str,
}

impl<'a> From<&'a ProductRecord> for CsvRow<'a> {
    fn from(record: &'a ProductRecord) -> Self {
        Self {
            product_page_url: &record.product_page_url,
            upc: &record.upc,
            title: &record.title,
            price_including_tax: &record.price_including_tax,
            price_excluding_tax: &record.price_excluding_tax,
            number_available: &record.number_available,
            product_description: &record.product_description,
            category: &record.category,
            review_rating: &record.review_rating,
            image_url: &record.image_url,
            category_url: "",
        }
    }
}
