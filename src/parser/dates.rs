use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static ISO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d{4}-\d{2}-\d{2})\)").unwrap());
static ISO_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d{4}-\d{2}-\d{2})T\d{2}:\d{2}:\d{2}\)").unwrap());
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\(.*?\)").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

/// Written-date grammars tried after parentheticals are stripped.
const WRITTEN_FORMATS: &[&str] = &["%B %d, %Y", "%d %B %Y"];

/// Normalize a free-text date expression to `YYYY-MM-DD`.
///
/// Machine-readable dates in parentheses win and are returned verbatim. A bare
/// year collapses to January 1st of that year. Returns `None` when nothing
/// date-like is present.
pub fn normalize(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    if let Some(caps) = ISO_RE.captures(text) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = ISO_TIME_RE.captures(text) {
        return Some(caps[1].to_string());
    }

    let cleaned = PAREN_RE.replace_all(text, "");
    let cleaned = cleaned.trim();
    for fmt in WRITTEN_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cleaned, fmt) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    YEAR_RE.find(text).map(|m| format!("{}-01-01", m.as_str()))
}
