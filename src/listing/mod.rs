//! Catalog navigation: the category list on the home page and the
//! paginated product listings of each category.

use anyhow::{Context, Result, anyhow, bail};
use scraper::Html;
use url::Url;

use crate::models::CategoryLink;
use crate::selectors::SiteSelectors;

/// Product links found on one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Raw `href` of every product entry, in page order
    pub product_hrefs: Vec<String>,
    /// Absolute URL of the following page, if any
    pub next_page: Option<String>,
}

/// Read the category links of the home page navigation.
///
/// # Arguments
/// * `html` - The home page markup
/// * `base_url` - Site root the links are relative to
///
/// # Returns
/// * `Result<Vec<CategoryLink>>` - Categories in navigation order, or an error when the navigation is absent
pub fn parse_categories(selectors: &SiteSelectors, html: &str, base_url: &str) -> Result<Vec<CategoryLink>> {
    let document = Html::parse_document(html);
    let base = Url::parse(base_url).with_context(|| format!("Invalid base URL {base_url}"))?;

    let nav = document
        .select(&selectors.nav_list)
        .next()
        .ok_or_else(|| anyhow!("Category navigation not found on {base_url}"))?;

    nav.select(&selectors.link)
        .map(|link| -> Result<CategoryLink> {
            let href = link
                .value()
                .attr("href")
                .ok_or_else(|| anyhow!("Category link without href"))?;
            let url = base
                .join(href)
                .with_context(|| format!("Invalid category href {href}"))?;

            Ok(CategoryLink {
                name: link.text().collect(),
                url: url.to_string(),
            })
        })
        .collect()
}

/// Read the product links and next-page control of a listing page.
///
/// The next-page href is relative to the listing page itself.
pub fn parse_listing(selectors: &SiteSelectors, html: &str, page_url: &str) -> Result<ListingPage> {
    let document = Html::parse_document(html);

    let product_hrefs = document
        .select(&selectors.product_pod)
        .filter_map(|product| product.select(&selectors.link).next())
        .filter_map(|link| link.value().attr("href"))
        .map(str::to_string)
        .collect();

    let next_page = match document
        .select(&selectors.next_page)
        .next()
        .and_then(|next| next.select(&selectors.link).next())
        .and_then(|link| link.value().attr("href"))
    {
        Some(href) => {
            let current = Url::parse(page_url).with_context(|| format!("Invalid listing URL {page_url}"))?;
            let next = current
                .join(href)
                .with_context(|| format!("Invalid next page href {href}"))?;
            Some(next.to_string())
        }
        None => None,
    };

    Ok(ListingPage {
        product_hrefs,
        next_page,
    })
}

/// Turn a listing href into a product page URL.
///
/// The site emits two href shapes: `../../../slug/index.html` on category
/// pages and `../../slug/index.html` elsewhere. They are told apart by the
/// number of `/` separators; any other shape is rejected. Tied to this one
/// site's layout.
pub fn resolve_product_href(href: &str, base_url: &str) -> Result<String> {
    let prefix = if href.matches('/').count() >= 4 {
        "../../../"
    } else {
        "../../"
    };

    let Some(path) = href.strip_prefix(prefix) else {
        bail!("unexpected product href shape: {href}");
    };

    Ok(format!("{base_url}catalogue/{path}"))
}
