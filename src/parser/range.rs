use std::sync::LazyLock;

use regex::Regex;

/// Entry text carrying this token is a known future-dated scrape artifact.
pub const FUTURE_ARTIFACT_TOKEN: &str = "2025";

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<delim> [–-] )",
        r"|(?P<machine>\(\d{4}-\d{2}-\d{2}(?:T\d{2}:\d{2}:\d{2})?\))",
        r"|\b(?P<month>January|February|March|April|May|June|July|August|September|October|November|December)\b",
        r"|\b(?P<year>\d{4})\b",
    ))
    .unwrap()
});
static DAY_BEFORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{1,2}\s+$").unwrap());
static CALLED_BY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)called by").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Delimiter,
    MachineDate,
    Month,
    Year,
}

/// A date-relevant span of entry text, by byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
}

fn scan(text: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let (kind, m) = if let Some(m) = caps.name("delim") {
                (TokenKind::Delimiter, m)
            } else if let Some(m) = caps.name("machine") {
                (TokenKind::MachineDate, m)
            } else if let Some(m) = caps.name("month") {
                (TokenKind::Month, m)
            } else {
                (TokenKind::Year, caps.name("year")?)
            };
            Some(Token {
                kind,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd<'a> {
    /// Single-date form, no range delimiter.
    Open,
    /// Explicit "present".
    Present,
    Until(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeParts<'a> {
    /// Uncleaned text before the start date.
    pub role_phrase: &'a str,
    pub start_text: &'a str,
    pub end: RangeEnd<'a>,
}

/// Split one entry's text into role phrase, start date text and end.
///
/// The rightmost spaced dash is the range separator; earlier dashes stay in
/// the role phrase. The start date begins at the rightmost month name before
/// the separator. Returns `None` when the entry has no date anchor or carries
/// [`FUTURE_ARTIFACT_TOKEN`].
pub fn split(text: &str) -> Option<RangeParts<'_>> {
    if text.contains(FUTURE_ARTIFACT_TOKEN) {
        return None;
    }
    let tokens = scan(text);

    if let Some(idx) = tokens.iter().rposition(|t| t.kind == TokenKind::Delimiter) {
        let delim = tokens[idx];
        // A dash with no date before it is prose; fall through to the single-date form.
        if let Some(anchor) = date_anchor(text, &tokens[..idx]) {
            let tail = text[delim.end..].trim();
            let end = if tail.to_lowercase().contains("present") {
                RangeEnd::Present
            } else {
                RangeEnd::Until(tail)
            };
            return Some(RangeParts {
                role_phrase: &text[..anchor],
                start_text: text[anchor..delim.start].trim(),
                end,
            });
        }
    }

    let anchor = date_anchor(text, &tokens)?;
    Some(RangeParts {
        role_phrase: &text[..anchor],
        start_text: text[anchor..].trim(),
        end: RangeEnd::Open,
    })
}

/// Byte offset where the start date begins: the rightmost month name (pulled
/// back over a day number written just before it), else the first
/// machine-readable date (pulled back over a bare year written just before it).
fn date_anchor(text: &str, tokens: &[Token]) -> Option<usize> {
    if let Some(month) = tokens.iter().rev().find(|t| t.kind == TokenKind::Month) {
        let anchor = DAY_BEFORE_RE
            .find(&text[..month.start])
            .map_or(month.start, |day| day.start());
        return Some(anchor);
    }
    let pos = tokens.iter().position(|t| t.kind == TokenKind::MachineDate)?;
    let machine = tokens[pos];
    let anchor = match pos.checked_sub(1).map(|p| tokens[p]) {
        Some(prev)
            if prev.kind == TokenKind::Year
                && text[prev.end..machine.start]
                    .chars()
                    .all(|c| c == ',' || c.is_whitespace()) =>
        {
            prev.start
        }
        _ => machine.start,
    };
    Some(anchor)
}

/// Drop attribution clauses and labels from a role phrase.
pub fn clean_role_phrase(phrase: &str) -> String {
    let text = match CALLED_BY_RE.find(phrase) {
        Some(m) => &phrase[..m.start()],
        None => phrase,
    };
    let text = text.trim();
    let text = text.strip_prefix("Positions:").map(str::trim_start).unwrap_or(text);
    let text = text.strip_suffix(',').unwrap_or(text).trim_end();
    let text = text
        .strip_suffix(" –")
        .or_else(|| text.strip_suffix(" -"))
        .unwrap_or(text);
    text.trim().to_string()
}
