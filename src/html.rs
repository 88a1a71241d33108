use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::error_handling::{ErrorType, ProcessingStats};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const ANCHOR_SELECTOR_STR: &str = "a";
const PARAGRAPH_SELECTOR_STR: &str = "p";

/// Sentinel returned when a document has no `<title>` element.
pub const NO_TITLE: &str = "No Title Found";
/// Sentinel returned when a document has no description meta tag.
pub const NO_META_DESCRIPTION: &str = "No Meta Description Found";

/// Scheme prefix a link must carry to count as secure.
const SECURE_SCHEME: &str = "https://";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR).expect("Failed to parse title selector - this is a bug")
});

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(META_DESCRIPTION_SELECTOR_STR)
        .expect("Failed to parse meta description selector - this is a bug")
});

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR).expect("Failed to parse anchor selector - this is a bug")
});

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(PARAGRAPH_SELECTOR_STR)
        .expect("Failed to parse paragraph selector - this is a bug")
});

/// Extracts the page title from an HTML document.
///
/// Returns the text content of the first `<title>` element, trimmed of
/// whitespace. If no title is found, increments the error counter and returns
/// the `"No Title Found"` sentinel.
pub fn extract_title(document: &Html, stats: &ProcessingStats) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => element.text().collect::<String>().trim().to_string(),
        None => {
            stats.increment_error(ErrorType::TitleExtractError);
            NO_TITLE.to_string()
        }
    }
}

/// Extracts the meta description from an HTML document.
///
/// Searches for a `<meta name="description">` element and returns its
/// `content` attribute value, trimmed. If the tag (or its content attribute)
/// is missing, increments the error counter and returns the
/// `"No Meta Description Found"` sentinel.
pub fn extract_meta_description(document: &Html, stats: &ProcessingStats) -> String {
    let description = document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string());

    match description {
        Some(content) => content,
        None => {
            stats.increment_error(ErrorType::MetaDescriptionExtractError);
            NO_META_DESCRIPTION.to_string()
        }
    }
}

/// Collects every anchor href that starts with `https://`.
///
/// Links are returned in document order with no deduplication. Anchors
/// without an `href` attribute are skipped silently.
pub fn extract_https_links(document: &Html) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.starts_with(SECURE_SCHEME))
        .map(str::to_string)
        .collect()
}

/// Counts `<p>` elements in an HTML document. Returns 0 if there are none.
pub fn count_paragraphs(document: &Html) -> usize {
    document.select(&PARAGRAPH_SELECTOR).count()
}
