use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

pub const UNKNOWN_NAME: &str = "unknown_name";
pub const UNKNOWN_THUMBNAIL: &str = "unknown_thumbnail";

/// Class marking the theme's subtitle paragraph, which carries no biography.
const SUBTITLE_CLASS: &str = "td-post-sub-title";

static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static LD_JSON_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());
static PARAGRAPH_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static THUMBNAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""thumbnailUrl":\s*"([^"]+)""#).unwrap());

/// Doctor name from the page title, left of the first `-`.
pub fn doctor_name(doc: &Html) -> String {
    match doc.select(&TITLE_SEL).next() {
        Some(el) => {
            let title = el.text().collect::<String>();
            title.split('-').next().unwrap_or("").trim().to_string()
        }
        None => UNKNOWN_NAME.to_string(),
    }
}

/// Profile image URL scanned out of the structured-data script blocks.
/// Textual match, so malformed JSON still yields a result.
pub fn thumbnail_url(doc: &Html) -> String {
    for script in doc.select(&LD_JSON_SEL) {
        let content = script.text().collect::<String>();
        if let Some(caps) = THUMBNAIL_RE.captures(&content) {
            return caps[1].to_string();
        }
    }
    UNKNOWN_THUMBNAIL.to_string()
}

/// Raw markup of the first paragraph, unless it is the subtitle paragraph.
/// None means the profile has no biography and produces no record.
pub fn biography_html(doc: &Html) -> Option<String> {
    let paragraph = doc.select(&PARAGRAPH_SEL).next()?;
    let is_subtitle = paragraph
        .value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == SUBTITLE_CLASS));
    if is_subtitle {
        return None;
    }
    Some(paragraph.html())
}
