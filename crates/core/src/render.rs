//! Result rendering: HTML fragments for the results container and plain text for terminals.

use askama::Template;

use crate::types::{DupeItem, QueryItem};

// ---------------------------------------------------------------------------
// Static messages
// ---------------------------------------------------------------------------

pub const PROMPT_MSG: &str = "Please enter a perfume name.";
pub const LOADING_MSG: &str = "Searching…";
pub const NOT_FOUND_MSG: &str = "Not found. Try a different name.";
pub const SERVER_ERROR_MSG: &str = "Server error.";
pub const NO_MATCHES_MSG: &str = "No dupes matched your filters.";
pub const FETCH_ERROR_MSG: &str = "Error fetching results.";

/// Brand shown in the heading when the server has none.
const UNKNOWN_BRAND: &str = "unknown";
/// Shown instead of a price when the server has none.
const NO_PRICE: &str = "N/A";

/// Wrap a static message in a paragraph.
pub fn message_html(msg: &str) -> String {
    format!("<p>{msg}</p>")
}

// ---------------------------------------------------------------------------
// Field formatting
// ---------------------------------------------------------------------------

/// `£19.5`, `£20`, or `N/A`.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("£{}", number_text(p)),
        None => NO_PRICE.to_string(),
    }
}

/// Shortest round-trip decimal, switching to exponent form (`1e+21`, `1.5e-7`)
/// outside [1e-6, 1e21) the way browsers print numbers.
fn number_text(n: f64) -> String {
    let abs = n.abs();
    if abs == 0.0 || !abs.is_finite() || (1e-6..1e21).contains(&abs) {
        return format!("{n}");
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Fraction in [0,1] as a percentage with one decimal: `0.873` -> `87.3%`.
/// Ties round away from zero (`0.1225` -> `12.3%`).
pub fn format_similarity(similarity: f64) -> String {
    let tenths = (similarity * 100.0 * 10.0).round() / 10.0;
    format!("{tenths:.1}%")
}

/// Lower-cased name and brand of the searched item; a missing or empty brand
/// becomes `unknown`.
fn heading_parts(query: &QueryItem) -> (String, String) {
    let brand = query
        .brand
        .as_deref()
        .map(str::to_lowercase)
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| UNKNOWN_BRAND.to_string());
    (query.name.to_lowercase(), brand)
}

/// Heading text, e.g. `Similar to original (lux)`.
pub fn heading(query: &QueryItem) -> String {
    let (name, brand) = heading_parts(query);
    format!("Similar to {name} ({brand})")
}

// ---------------------------------------------------------------------------
// HTML listing
// ---------------------------------------------------------------------------

struct Card<'a> {
    name: &'a str,
    brand: &'a str,
    price: String,
    similarity: String,
}

#[derive(Template)]
#[template(path = "listing.html")]
struct ListingTemplate<'a> {
    query_name: String,
    query_brand: String,
    cards: Vec<Card<'a>>,
}

/// Render the heading plus one card per result, in server order.
pub fn listing_html(query: &QueryItem, items: &[DupeItem]) -> Result<String, askama::Error> {
    let (query_name, query_brand) = heading_parts(query);
    let cards = items
        .iter()
        .map(|it| Card {
            name: &it.name,
            brand: &it.brand,
            price: format_price(it.price),
            similarity: format_similarity(it.similarity),
        })
        .collect();
    ListingTemplate { query_name, query_brand, cards }.render()
}

// ---------------------------------------------------------------------------
// Plain text listing
// ---------------------------------------------------------------------------

/// Numbered terminal listing under the heading line.
pub fn listing_text(query: &QueryItem, items: &[DupeItem]) -> String {
    let mut out = heading(query);
    out.push('\n');
    for (i, it) in items.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} by {} | {} | Similarity: {}\n",
            i + 1,
            it.name,
            it.brand,
            format_price(it.price),
            format_similarity(it.similarity),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original() -> QueryItem {
        QueryItem { name: "Original".into(), brand: Some("Lux".into()), price: None }
    }

    fn rose() -> DupeItem {
        DupeItem { name: "Rose".into(), brand: "Acme".into(), price: Some(19.5), similarity: 0.873 }
    }

    #[test]
    fn price_formats() {
        assert_eq!(format_price(Some(19.5)), "£19.5");
        assert_eq!(format_price(Some(20.0)), "£20");
        assert_eq!(format_price(None), "N/A");
    }

    #[test]
    fn extreme_prices_use_exponent_form() {
        assert_eq!(format_price(Some(1e21)), "£1e+21");
        assert_eq!(format_price(Some(1.5e21)), "£1.5e+21");
        assert_eq!(format_price(Some(1.5e-7)), "£1.5e-7");
        assert_eq!(format_price(Some(999999.5)), "£999999.5");
        assert_eq!(format_price(Some(0.0)), "£0");
    }

    #[test]
    fn similarity_rounds_to_one_decimal() {
        assert_eq!(format_similarity(0.873), "87.3%");
        assert_eq!(format_similarity(1.0), "100.0%");
        assert_eq!(format_similarity(0.0), "0.0%");
        assert_eq!(format_similarity(0.12345), "12.3%");
    }

    #[test]
    fn similarity_ties_round_up() {
        assert_eq!(format_similarity(0.1225), "12.3%");
        assert_eq!(format_similarity(0.9825), "98.3%");
        assert_eq!(format_similarity(0.0025), "0.3%");
    }

    #[test]
    fn heading_is_lowercased() {
        assert_eq!(heading(&original()), "Similar to original (lux)");
    }

    #[test]
    fn missing_or_empty_brand_is_unknown() {
        let mut q = original();
        q.brand = None;
        assert_eq!(heading(&q), "Similar to original (unknown)");
        q.brand = Some(String::new());
        assert_eq!(heading(&q), "Similar to original (unknown)");
    }

    #[test]
    fn listing_contains_heading_and_card() {
        let html = listing_html(&original(), &[rose()]).unwrap();
        assert!(html.starts_with("<h2>Similar to original (lux)</h2>"), "{html}");
        assert!(html.contains(r#"<div class="card">"#));
        assert!(html.contains("<strong>Rose</strong>"));
        assert!(html.contains(r#"<span class="brand">by Acme</span>"#));
        assert!(html.contains("Price: £19.5"));
        assert!(html.contains("Similarity: 87.3%"));
    }

    #[test]
    fn null_price_shows_placeholder() {
        let mut item = rose();
        item.price = None;
        let html = listing_html(&original(), &[item]).unwrap();
        assert!(html.contains("Price: N/A"));
        assert!(!html.contains('£'));
    }

    #[test]
    fn cards_keep_server_order() {
        let mut second = rose();
        second.name = "Amber".into();
        let html = listing_html(&original(), &[rose(), second]).unwrap();
        let rose_at = html.find("Rose").unwrap();
        let amber_at = html.find("Amber").unwrap();
        assert!(rose_at < amber_at);
        assert_eq!(html.matches(r#"<div class="card">"#).count(), 2);
    }

    #[test]
    fn server_text_is_escaped() {
        let mut item = rose();
        item.name = "<script>x</script>".into();
        let html = listing_html(&original(), &[item]).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn text_listing_numbers_results() {
        let text = listing_text(&original(), &[rose()]);
        assert_eq!(text, "Similar to original (lux)\n 1. Rose by Acme | £19.5 | Similarity: 87.3%\n");
    }
}
