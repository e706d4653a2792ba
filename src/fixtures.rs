//! HTML samples shaped like books.toscrape.com pages

pub const BASE_URL: &str = "http://books.toscrape.com/";

pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<head><title>All products | Books to Scrape - Sandbox</title></head>
<body>
<div class="side_categories">
    <ul class="nav nav-list">
        <li>
            <a href="catalogue/category/books_1/index.html">
                Books
            </a>
            <ul>
                <li>
                    <a href="catalogue/category/books/travel_2/index.html">
                        Travel
                    </a>
                </li>
                <li>
                    <a href="catalogue/category/books/poetry_23/index.html">
                        Poetry
                    </a>
                </li>
            </ul>
        </li>
    </ul>
</div>
</body>
</html>"#;

pub const TRAVEL_URL: &str = "http://books.toscrape.com/catalogue/category/books/travel_2/index.html";

pub const TRAVEL_PAGE_1: &str = r#"<html><body>
<ol class="row">
    <li><article class="product_pod">
        <div class="image_container"><a href="../../../its-only-the-himalayas_981/index.html"><img src="../../../../media/cache/27/a5/27a53d0bb95bdd88288eaf66c9230d7e.jpg" alt="It's Only the Himalayas" class="thumbnail"></a></div>
        <h3><a href="../../../its-only-the-himalayas_981/index.html" title="It's Only the Himalayas">It's Only the Himalayas</a></h3>
    </article></li>
    <li><article class="product_pod">
        <div class="image_container"><a href="../../../full-moon-over-noahs-ark_811/index.html"><img src="../../../../media/cache/57/77/57770cac1628f4407636635f4b85e88c.jpg" alt="Full Moon" class="thumbnail"></a></div>
        <h3><a href="../../../full-moon-over-noahs-ark_811/index.html" title="Full Moon over Noah’s Ark">Full Moon over Noah’s ...</a></h3>
    </article></li>
</ol>
<ul class="pager">
    <li class="current">Page 1 of 2</li>
    <li class="next"><a href="page-2.html">next</a></li>
</ul>
</body></html>"#;

pub const TRAVEL_PAGE_2_URL: &str = "http://books.toscrape.com/catalogue/category/books/travel_2/page-2.html";

pub const TRAVEL_PAGE_2: &str = r#"<html><body>
<ol class="row">
    <li><article class="product_pod">
        <h3><a href="../../../see-america_732/index.html" title="See America">See America</a></h3>
    </article></li>
    <li><article class="product_pod">
        <h3><a href="../../x/index.html" title="Short shape">Short shape</a></h3>
    </article></li>
</ol>
<ul class="pager">
    <li class="previous"><a href="index.html">previous</a></li>
    <li class="current">Page 2 of 2</li>
</ul>
</body></html>"#;

pub const POETRY_URL: &str = "http://books.toscrape.com/catalogue/category/books/poetry_23/index.html";

pub const EMPTY_LISTING: &str = r#"<html><body>
<form class="form-horizontal"><strong>0</strong> results.</form>
<ol class="row"></ol>
</body></html>"#;

pub const HIMALAYAS_URL: &str = "http://books.toscrape.com/catalogue/its-only-the-himalayas_981/index.html";

pub const HIMALAYAS_IMAGE_URL: &str =
    "http://books.toscrape.com/media/cache/6d/41/6d418a73cc7d4ecfd75ca11d854041db.jpg";

pub const PRODUCT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<body id="default" class="default">
<ul class="breadcrumb">
    <li><a href="../../index.html">Home</a></li>
    <li><a href="../category/books_1/index.html">Books</a></li>
    <li><a href="../category/books/travel_2/index.html">Travel</a></li>
    <li class="active">It's Only the Himalayas</li>
</ul>
<article class="product_page">
    <div class="row">
        <div class="col-sm-6">
            <div id="product_gallery" class="carousel">
                <div class="thumbnail"><div class="carousel-inner"><div class="item active">
                    <img src="../../media/cache/6d/41/6d418a73cc7d4ecfd75ca11d854041db.jpg" alt="It's Only the Himalayas" />
                </div></div></div>
            </div>
        </div>
        <div class="col-sm-6 product_main">
            <h1>It's Only the Himalayas</h1>
            <p class="price_color">£45.17</p>
            <p class="instock availability"><i class="icon-ok"></i> In stock (19 available)</p>
            <p class="star-rating Two">
                <i class="icon-star"></i>
            </p>
        </div>
    </div>
    <div id="product_description" class="sub-header">
        <h2>Product Description</h2>
    </div>
    <p>“Wherever you go, whatever you do, just . . . don’t do anything stupid.” —My Mother</p>
    <div class="sub-header"><h2>Product Information</h2></div>
    <table class="table table-striped">
        <tr><th>UPC</th><td>a22124811bfa8350</td></tr>
        <tr><th>Product Type</th><td>Books</td></tr>
        <tr><th>Price (excl. tax)</th><td>£45.17</td></tr>
        <tr><th>Price (incl. tax)</th><td>£45.17</td></tr>
        <tr><th>Tax</th><td>£0.00</td></tr>
        <tr><th>Availability</th><td>In stock (19 available)</td></tr>
        <tr><th>Number of reviews</th><td>0</td></tr>
    </table>
</article>
</body>
</html>"#;

/// A product page with nothing but a title
pub const BARE_PRODUCT_PAGE: &str = r#"<html><body>
<article class="product_page">
    <h1>A Book Without Details</h1>
    <table class="table table-striped">
        <tr><th>Product Type</th><td>Books</td></tr>
    </table>
</article>
</body></html>"#;

/// Builds a product page with the given title and the full set of fields
pub fn product_page(title: &str) -> String {
    PRODUCT_PAGE.replace("It's Only the Himalayas", title)
}
