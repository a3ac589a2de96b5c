//! Integration tests for FitView.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fitview-integration-tests
//! ```
//!
//! No database or network is needed. Pages are canned HTML fixtures shaped
//! like the retailers they imitate, and persistence runs over
//! [`MemoryProductStore`](fitview_ingest::MemoryProductStore).
//!
//! # Test Categories
//!
//! - `pipeline` - Retailer pages resolved end to end
//! - `gate` - Deduplicated ingestion of resolved pages
//! - `fit` - Scoring and translation across the public API

use fitview_ingest::{HtmlDocument, ResolvedProduct, resolve_identity};
use url::Url;

/// A saved retailer page.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub url: &'static str,
    pub html: &'static str,
}

impl Fixture {
    /// Run the resolution pipeline over this page.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the fixture URL is malformed.
    pub fn resolve(&self) -> Result<ResolvedProduct, url::ParseError> {
        let url = Url::parse(self.url)?;
        let doc = HtmlDocument::parse(self.html);
        Ok(resolve_identity(&url, &doc))
    }
}

pub const UNIQLO_AU: Fixture = Fixture {
    url: "https://www.uniqlo.com/au/en/products/E475053-000/00?colorDisplayCode=03",
    html: r#"<!DOCTYPE html>
<html lang="en-AU">
<head>
  <title>AIRism Cotton Oversized Crew Neck T-Shirt | UNIQLO AU</title>
  <meta property="og:site_name" content="UNIQLO">
  <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "Product",
     "name": "AIRism Cotton Oversized Crew Neck T-Shirt",
     "brand": {"@type": "Brand", "name": "UNIQLO"},
     "sku": "E475053-000-03"}
  </script>
</head>
<body>
  <nav aria-label="breadcrumb"><ol><li><a href="/au/en/">Home</a></li><li><a href="/au/en/men">Men</a></li><li>T-Shirts</li></ol></nav>
  <h1>AIRism Cotton Oversized Crew Neck T-Shirt</h1>
  <section class="details"><p>Item Code: 475053</p><p>Smooth AIRism with the look of cotton.</p></section>
</body>
</html>"#,
};

/// Same design as [`UNIQLO_AU`] in a different colourway.
pub const UNIQLO_AU_NAVY: Fixture = Fixture {
    url: "https://www.uniqlo.com/au/en/products/E475053-000/00?colorDisplayCode=69",
    html: r#"<html><head>
  <title>AIRism Cotton Oversized Crew Neck T-Shirt | UNIQLO AU</title>
  <script type="application/ld+json">{"@type": "Product", "brand": {"name": "UNIQLO"}, "sku": "E475053-000-69"}</script>
</head><body><p>Item Code: 475053</p></body></html>"#,
};

pub const NIKE_JP: Fixture = Fixture {
    url: "https://www.nike.com/jp/t/tech-windrunner-VBcJhM/HV0950-234",
    html: r#"<html lang="ja">
<head>
  <title>Nike Tech Men's Windrunner Jacket. Nike JP</title>
  <meta property="og:description" content="Nike Tech Men's Windrunner Jacket. Colour: Khaki. Style: HV0950-234">
  <script type="application/ld+json">{"@context": "https://schema.org", "@type": "Product", "brand": {"@type": "Brand", "name": "Nike"}}</script>
</head>
<body><h1>Nike Tech</h1><p>Men's Windrunner Jacket</p></body>
</html>"#,
};

pub const KMART_AU: Fixture = Fixture {
    url: "https://www.kmart.com.au/product/rib-tank-s169486/?selectedSwatch=DRIFT+BROWN",
    html: r#"<html>
<head>
  <title>Rib Tank | Kmart</title>
  <meta property="og:site_name" content="Kmart">
</head>
<body>
  <ul class="breadcrumbs"><li>Home</li><li>Women</li><li>Tops</li></ul>
  <h1>Rib Tank</h1>
</body>
</html>"#,
};

pub const ASOS_US: Fixture = Fixture {
    url: "https://www.asos.com/us/asos-design/asos-design-oversized-t-shirt-in-black/prd/204957063",
    html: r#"<html>
<head>
  <title>ASOS DESIGN oversized t-shirt in black | ASOS</title>
  <script type="application/ld+json">{"@type": "Product", "name": "ASOS DESIGN oversized t-shirt in black", "sku": "204957063"}</script>
</head>
<body><h1>ASOS DESIGN oversized t-shirt in black</h1><p>Shop this men's tee in our new season edit.</p></body>
</html>"#,
};

pub const AMAZON_US: Fixture = Fixture {
    url: "https://www.amazon.com/dp/B0CX1ABCDE",
    html: r#"<html>
<head>
  <title>Nike Mens Dri-FIT Running Shorts | Amazon.com</title>
  <meta property="og:brand" content="Nike">
  <script type="application/ld+json">{"@type": "Product", "brand": {"name": "Nike"}, "sku": "B0CX1ABCDE"}</script>
</head>
<body><p>Visit the Nike Store</p></body>
</html>"#,
};

pub const ZARA_AU: Fixture = Fixture {
    url: "https://www.zara.com/au/en/perforated-long-sleeve-t-shirt-p04387416.html",
    html: r#"<html>
<head>
  <title>PERFORATED LONG SLEEVE T-SHIRT - Black | ZARA Australia</title>
  <script type="application/ld+json">{"@type": "Product", "brand": "ZARA", "sku": "04387416-800"}</script>
</head>
<body><h1>PERFORATED LONG SLEEVE T-SHIRT</h1></body>
</html>"#,
};

/// A different Zara product from [`ZARA_AU`].
pub const ZARA_AU_KNIT: Fixture = Fixture {
    url: "https://www.zara.com/au/en/textured-knit-sweater-p05755320.html",
    html: r#"<html>
<head>
  <title>TEXTURED KNIT SWEATER | ZARA Australia</title>
  <script type="application/ld+json">{"@type": "Product", "brand": "ZARA", "sku": "05755320-401"}</script>
</head>
<body></body>
</html>"#,
};

pub const HM_UK: Fixture = Fixture {
    url: "https://www2.hm.com/en_gb/productpage.1316883001.html",
    html: r#"<html>
<head>
  <title>Linen-blend dress | H&amp;M GB</title>
  <script type="application/ld+json">{"@type": "Product", "brand": {"@type": "Brand", "name": "H&M"}, "sku": "1316883001"}</script>
</head>
<body>
  <ol itemscope itemtype="https://schema.org/BreadcrumbList">
    <li itemprop="itemListElement"><a itemprop="item" href="/en_gb/"><span itemprop="name">Home</span></a></li>
    <li itemprop="itemListElement"><a itemprop="item" href="/en_gb/ladies"><span itemprop="name">Women</span></a></li>
    <li itemprop="itemListElement"><a itemprop="item" href="/en_gb/ladies/dresses"><span itemprop="name">Dresses</span></a></li>
  </ol>
</body>
</html>"#,
};

pub const BIGW_AU: Fixture = Fixture {
    url: "https://www.bigw.com.au/product/double-cloth-shirt/p/1747940",
    html: r#"<html><head><title>Double Cloth Shirt | BIG W</title></head><body><h1>Double Cloth Shirt</h1></body></html>"#,
};
