const NAME_MARKER: &str = "Name:";
const LINKS_BLOCK: &str = "Links";

/// One person's lines: the name line first, then metadata and positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBlock<'a> {
    pub name_line: &'a str,
    pub lines: Vec<&'a str>,
}

#[derive(Debug, Default)]
pub struct SplitDocument<'a> {
    pub people: Vec<PersonBlock<'a>>,
    pub links: String,
}

/// Split raw text into person blocks and the trailing links section.
///
/// A line whose trimmed text starts with `Name:` opens a block. `Name: Links`
/// opens the links section, which runs to the end of the document. Text before
/// the first marker is ignored.
pub fn split(text: &str) -> SplitDocument<'_> {
    let mut doc = SplitDocument::default();
    let mut current: Option<PersonBlock<'_>> = None;
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(NAME_MARKER) {
            doc.people.extend(current.take());
            if rest.trim() == LINKS_BLOCK {
                doc.links = lines.by_ref().collect::<Vec<_>>().join("\n");
                break;
            }
            current = Some(PersonBlock {
                name_line: trimmed,
                lines: Vec::new(),
            });
        } else if let Some(block) = current.as_mut() {
            block.lines.push(line);
        }
    }
    doc.people.extend(current);

    doc
}
