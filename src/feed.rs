//! The article model and the image filter.
//!
//! `Article` is the shape of one entry in the API's `news` array.  Every
//! field is a plain string and every field defaults to empty when the JSON
//! omits it, so a sparse or malformed entry can never fault downstream
//! display code.

use chrono::DateTime;
use serde::Deserialize;

/// One news article as delivered by the `latest-news` endpoint.
///
/// There is no stable id field in the source data; articles are identified
/// only by position in the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Article {
    /// Headline.
    pub title: String,
    /// Summary text, often a sentence or two.
    pub description: String,
    /// Byline; frequently empty in this API.
    pub author: String,
    /// Publication stamp in the source's fixed `<date> +<offset>` format,
    /// e.g. `2024-05-01 09:30:00 +0000`.  Kept as a string; see
    /// [`Article::published_date`].
    pub published: String,
    /// Illustration URL.  Articles with an empty `image` are dropped by
    /// [`with_images`].
    pub image: String,
    /// External link to the full story.
    pub url: String,
}

impl Article {
    /// The publication stamp without its timezone offset, for display.
    ///
    /// Parses the fixed source format when it conforms, otherwise falls back
    /// to chopping the string at `" +"`.  Never fails: a garbage stamp is
    /// shown as-is.
    pub fn published_date(&self) -> String {
        if let Ok(dt) = DateTime::parse_from_str(&self.published, "%Y-%m-%d %H:%M:%S %z") {
            return dt.format("%Y-%m-%d %H:%M:%S").to_string();
        }
        match self.published.split_once(" +") {
            Some((date, _offset)) => date.to_string(),
            None => self.published.clone(),
        }
    }

    /// Whether the article carries a usable illustration reference.
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Keep only articles with a non-empty `image`, preserving order.
///
/// This is the single fixed filter of the viewer.  No other field is
/// validated here.
pub fn with_images(articles: Vec<Article>) -> Vec<Article> {
    articles.into_iter().filter(Article::has_image).collect()
}

/// Truncate `text` to at most `max` characters, appending an ellipsis when
/// anything was cut.
///
/// Counts characters rather than bytes so multi-byte scripts never split
/// mid-codepoint.  Short or empty input comes back unchanged.
pub fn snippet(text: &str, max: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
