use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static LINK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.\s+(https?://.*)").unwrap());
static REF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\d+)\]").unwrap());

/// Numeric footnote reference → URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable {
    links: BTreeMap<String, String>,
}

impl LinkTable {
    /// Build from the links section. Lines that are not `<digits>. <url>` are ignored.
    pub fn parse(section: &str) -> Self {
        let links = section
            .lines()
            .filter_map(|line| {
                let caps = LINK_LINE_RE.captures(line)?;
                Some((caps[1].to_string(), caps[2].trim_end().to_string()))
            })
            .collect();
        LinkTable { links }
    }

    pub fn get(&self, reference: &str) -> Option<&str> {
        self.links.get(reference).map(String::as_str)
    }

    /// Resolve the first bracketed reference (`[3]`) in `text`.
    pub fn resolve(&self, text: &str) -> Option<String> {
        let caps = REF_RE.captures(text)?;
        self.get(&caps[1]).map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbered_urls() {
        let table = LinkTable::parse(
            "1. https://example.org/a.jpg\n  2. http://example.org/b.png  \nnot a link\n3. ftp://nope",
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1"), Some("https://example.org/a.jpg"));
        assert_eq!(table.get("2"), Some("http://example.org/b.png"));
        assert_eq!(table.get("3"), None);
    }

    #[test]
    fn resolve_bracketed_reference() {
        let table = LinkTable::parse("7. https://example.org/portrait.jpg");
        assert_eq!(
            table.resolve("Image: Official portrait [7]").as_deref(),
            Some("https://example.org/portrait.jpg")
        );
    }

    #[test]
    fn unknown_or_missing_reference_is_none() {
        let table = LinkTable::parse("7. https://example.org/portrait.jpg");
        assert_eq!(table.resolve("Image: [8]"), None);
        assert_eq!(table.resolve("Image: portrait"), None);
        assert!(LinkTable::default().is_empty());
    }
}
