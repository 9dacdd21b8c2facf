use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DELIM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Flatten the raw markup of a biography paragraph into a single
/// underscore-delimited string. Tags become delimiters, colons are dropped,
/// whitespace runs collapse to one space, delimiter runs collapse to one.
/// The result never starts or ends with a delimiter.
pub fn flatten(markup: &str) -> String {
    let text = TAG_RE.replace_all(markup, "_");
    let text = text.replace(':', "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = text.trim();
    let text = DELIM_RE.replace_all(text, "_");
    text.trim_matches('_').to_string()
}
