use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::range::{self, RangeEnd, FUTURE_ARTIFACT_TOKEN};
use super::{dates, roles};
use crate::records::RoleEntry;

/// A parenthesized machine date marks the last line of an entry.
static TERMINUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d{4}-\d{2}-\d{2}(?:T\d{2}:\d{2}:\d{2})?\)").unwrap());

const POSITIONS_LABEL: &str = "Positions:";

/// Group position lines into entries and parse each one, in source order.
///
/// Descriptions may wrap over several lines before a dated line closes the
/// entry. Text left in the buffer after the last dated line is dropped.
pub fn segment(lines: &[&str]) -> Vec<RoleEntry> {
    let mut roles = Vec::new();
    let mut buffer = String::new();

    for raw in lines {
        let line = raw.trim();
        let line = line.strip_prefix(POSITIONS_LABEL).map(str::trim_start).unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        if line.contains(FUTURE_ARTIFACT_TOKEN) {
            debug!(line, "skipping future-dated line");
            // A dated line closes the entry, so its wrapped description goes too.
            if TERMINUS_RE.is_match(line) {
                buffer.clear();
            }
            continue;
        }

        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(line);

        if TERMINUS_RE.is_match(line) {
            let entry_text = std::mem::take(&mut buffer);
            match parse_entry(&entry_text) {
                Some(role) => roles.push(role),
                None => debug!(entry = %entry_text, "discarding entry without start date"),
            }
        }
    }

    if !buffer.is_empty() {
        debug!(fragment = %buffer, "dropping trailing fragment with no dated line");
    }

    roles
}

/// Parse a single entry's text into a tenure. `None` when no start date is recoverable.
pub fn parse_entry(text: &str) -> Option<RoleEntry> {
    let parts = range::split(text)?;
    let start_date = dates::normalize(parts.start_text)?;
    let end_date = match parts.end {
        RangeEnd::Until(end) => dates::normalize(end),
        RangeEnd::Open | RangeEnd::Present => None,
    };
    let raw_role = range::clean_role_phrase(parts.role_phrase);
    let kind = roles::classify(Some(&raw_role));

    Some(RoleEntry {
        kind,
        raw_role,
        start_date,
        end_date,
    })
}
