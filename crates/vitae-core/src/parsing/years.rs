use regex::Regex;
use std::sync::LazyLock;

/// Four-digit years in the 1900s or 2000s.
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:19|20)[0-9]{2}").unwrap());

static CURRENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)present|current").unwrap());

/// First year appearing in `text`, or an empty string.
pub fn first_year(text: &str) -> String {
    YEAR_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Second year appearing in `text`, or an empty string.
pub fn second_year(text: &str) -> String {
    YEAR_RE
        .find_iter(text)
        .nth(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Whether `text` marks an ongoing period ("present", "current", any case).
pub fn mentions_current(text: &str) -> bool {
    CURRENT_RE.is_match(text)
}
