//! Gender category from URL, title, breadcrumb, and page text signals.
//!
//! Signals are checked from most to least specific and the first match wins.
//! Anywhere "men" and "women" are both tested, the women test runs first:
//! "men" is a substring of "women".

use fitview_core::GenderCategory;
use url::Url;

/// Detect the gender category of a product page.
#[must_use]
pub fn detect_gender(url: &Url, title: &str, body_text: &str, breadcrumbs: &str) -> GenderCategory {
    let path = url.path().to_lowercase();
    let title = title.to_lowercase();
    let crumbs = breadcrumbs.to_lowercase();
    let text = body_text.to_lowercase();

    from_path(&path)
        .or_else(|| from_title(&title))
        .or_else(|| from_breadcrumbs(&crumbs))
        .or_else(|| from_body(&text))
        .unwrap_or(GenderCategory::Unknown)
}

fn from_path(path: &str) -> Option<GenderCategory> {
    if path.contains("/men/") || path.contains("/mens/") {
        Some(GenderCategory::Mens)
    } else if path.contains("/women/") || path.contains("/womens/") {
        Some(GenderCategory::Womens)
    } else if path.contains("/unisex/") {
        Some(GenderCategory::Unisex)
    } else {
        None
    }
}

fn from_title(title: &str) -> Option<GenderCategory> {
    if title.contains("unisex") {
        Some(GenderCategory::Unisex)
    } else if title.contains("women's") || title.contains("womens ") {
        Some(GenderCategory::Womens)
    } else if title.contains("men's") || title.contains("mens ") {
        Some(GenderCategory::Mens)
    } else {
        None
    }
}

fn from_breadcrumbs(crumbs: &str) -> Option<GenderCategory> {
    if crumbs.contains("women") {
        Some(GenderCategory::Womens)
    } else if crumbs.contains("men") {
        Some(GenderCategory::Mens)
    } else {
        None
    }
}

fn from_body(text: &str) -> Option<GenderCategory> {
    if text.contains("unisex") {
        Some(GenderCategory::Unisex)
    } else if text.contains("women's") || text.contains("womenswear") {
        Some(GenderCategory::Womens)
    } else if text.contains("men's") || text.contains("menswear") {
        Some(GenderCategory::Mens)
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_url_path() {
        let none = "";
        assert_eq!(
            detect_gender(&url("https://example.com/products/men/shirt"), none, none, none),
            GenderCategory::Mens
        );
        assert_eq!(
            detect_gender(&url("https://example.com/products/womens/dress"), none, none, none),
            GenderCategory::Womens
        );
        assert_eq!(
            detect_gender(&url("https://example.com/products/unisex/hat"), none, none, none),
            GenderCategory::Unisex
        );
    }

    #[test]
    fn test_path_beats_conflicting_text() {
        let result = detect_gender(
            &url("https://example.com/men/shirt"),
            "Women's Shirt",
            "Shop womenswear and unisex basics",
            "Home > Women",
        );
        assert_eq!(result, GenderCategory::Mens);
    }

    #[test]
    fn test_title() {
        let item = url("https://www.amazon.com/dp/B0CX1");
        assert_eq!(detect_gender(&item, "Nike Mens T-Shirt", "", ""), GenderCategory::Mens);
        assert_eq!(detect_gender(&item, "Women's Running Tights", "", ""), GenderCategory::Womens);
        assert_eq!(detect_gender(&item, "Unisex Cap", "", ""), GenderCategory::Unisex);
    }

    #[test]
    fn test_breadcrumbs_check_women_first() {
        let item = url("https://example.com/products/item");
        assert_eq!(
            detect_gender(&item, "", "", "Home > Women > Dresses"),
            GenderCategory::Womens
        );
        assert_eq!(
            detect_gender(&item, "", "", "Home > Men > Shirts"),
            GenderCategory::Mens
        );
    }

    #[test]
    fn test_body_text() {
        let item = url("https://example.com/products/item");
        assert_eq!(detect_gender(&item, "", "A great menswear shirt", ""), GenderCategory::Mens);
        assert_eq!(
            detect_gender(&item, "", "A great womenswear dress", ""),
            GenderCategory::Womens
        );
        assert_eq!(detect_gender(&item, "", "A great unisex hat", ""), GenderCategory::Unisex);
    }

    #[test]
    fn test_unknown_without_signals() {
        let item = url("https://example.com/products/item");
        assert_eq!(
            detect_gender(&item, "Cotton Tee", "A great item", "Home > All"),
            GenderCategory::Unknown
        );
    }
}
