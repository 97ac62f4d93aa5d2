/**
 * Fixed-Selector Field Extraction
 *
 * Extracts title, authors, description, and cover image from a Litres
 * book page. The selectors target the page structure observed at the
 * time of writing; when one matches nothing the field is left empty and
 * a warning is logged, so a markup change degrades results instead of
 * failing requests.
 */

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Selector for the book title heading
const TITLE_SELECTOR: &str = r#"h1[itemprop="name"]"#;
/// Selector for author name nodes
const AUTHOR_SELECTOR: &str = r#"a[data-testid="art__personName--link"] span[itemprop="name"]"#;
/// Selector for the truncated description container
const DESCRIPTION_SELECTOR: &str = "div.Truncate_truncated__jKdVt";
/// Selector for the cover image node
const IMAGE_SELECTOR: &str = r#"img[itemprop="image"]"#;

/// Relative cover paths start with this prefix on Litres pages
const RELATIVE_IMAGE_PREFIX: &str = "./";
/// Absolute base the relative prefix is rewritten to
const IMAGE_BASE_URL: &str = "https://www.litres.ru/";

/// Structured fields extracted from a book page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookDetails {
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    pub image_url: String,
}

fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extract book fields from raw page HTML, best-effort
pub fn extract_book_details(html: &str) -> BookDetails {
    let document = Html::parse_document(html);

    let mut title = String::new();
    if let Ok(selector) = Selector::parse(TITLE_SELECTOR) {
        if let Some(element) = document.select(&selector).next() {
            title = element_text(element);
        }
    }
    if title.is_empty() {
        tracing::warn!("litres page yielded no title; selectors may be stale");
    }

    let mut authors = Vec::new();
    if let Ok(selector) = Selector::parse(AUTHOR_SELECTOR) {
        for element in document.select(&selector) {
            let name = element_text(element);
            if !name.is_empty() {
                authors.push(name);
            }
        }
    }
    if authors.is_empty() {
        tracing::warn!("litres page yielded no authors; selectors may be stale");
    }

    // Paragraph children of the truncated container, joined with single spaces
    let mut description = String::new();
    if let Ok(container) = Selector::parse(DESCRIPTION_SELECTOR) {
        if let (Some(element), Ok(paragraphs)) =
            (document.select(&container).next(), Selector::parse("p"))
        {
            description = element
                .select(&paragraphs)
                .map(element_text)
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
        }
    }

    let mut image_url = String::new();
    if let Ok(selector) = Selector::parse(IMAGE_SELECTOR) {
        if let Some(src) = document.select(&selector).next().and_then(|e| e.value().attr("src")) {
            image_url = match src.strip_prefix(RELATIVE_IMAGE_PREFIX) {
                Some(rest) => format!("{IMAGE_BASE_URL}{rest}"),
                None => src.to_string(),
            };
        }
    }

    BookDetails { title, authors, description, image_url }
}
