//! Main-content extraction for documentation pages.
//!
//! ### Primary Algorithm
//! - Textual scrape of the first `<main ...>...</main>` element, non-greedy,
//!   spanning newlines. This is not a structural parse and nested `</main>`
//!   text will end the match early.
//!
//! ### Stable Abstraction
//! - Uses the `Extractor` trait so a structural HTML parser can replace the
//!   scrape without changing tool code.
//!
//! ### Fallback
//! - When no region is found (or it is empty) the full body is returned
//!   unmodified. A miss is never an error.

use std::sync::LazyLock;

use regex::Regex;

static MAIN_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<main[^>]*>(.*?)</main>").expect("main element pattern is valid"));

/// Stable extractor trait for page content.
pub trait Extractor: Send + Sync {
    /// Return the primary content region of `html`, if one can be found.
    fn extract<'a>(&self, html: &'a str) -> Option<&'a str>;
}

/// Regex-based `<main>` extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainElementExtractor;

impl Extractor for MainElementExtractor {
    fn extract<'a>(&self, html: &'a str) -> Option<&'a str> {
        MAIN_ELEMENT
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|inner| !inner.is_empty())
    }
}

/// Extract the inner markup of the first `<main>` element, or the whole body.
pub fn extract_main(html: &str) -> &str {
    MainElementExtractor.extract(html).unwrap_or(html)
}
