use tracing::debug;

use super::document::PersonBlock;
use super::links::LinkTable;
use super::{dates, segment};
use crate::records::{PersonRecord, RoleEntry};

/// People whose every tenure starts on or after this date are scrape artifacts.
pub const PLAUSIBILITY_CUTOFF: &str = "2025-01-01";

const NAME_LABEL: &str = "Name:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assembly {
    Person(PersonRecord),
    /// No tenure with a recoverable start date.
    NoEvidence { name: String },
    /// Only future-dated tenures.
    Implausible { name: String },
}

#[derive(Debug, Default)]
struct Metadata {
    birth_date: Option<String>,
    death_date: Option<String>,
    image_url: Option<String>,
}

pub fn assemble(block: &PersonBlock<'_>, links: &LinkTable) -> Assembly {
    let name = clean_name(block.name_line);
    let mut meta = Metadata::default();
    let mut positions = Vec::new();

    for line in &block.lines {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("Born:") {
            meta.birth_date = dates::normalize(rest);
        } else if let Some(rest) = line.strip_prefix("Died:") {
            meta.death_date = dates::normalize(rest);
        } else if let Some(rest) = line.strip_prefix("Image:") {
            meta.image_url = links.resolve(rest);
            if meta.image_url.is_none() {
                debug!(name = %name, line, "image reference did not resolve");
            }
        } else {
            positions.push(line);
        }
    }

    let roles = segment::segment(&positions);
    finish(name, meta, roles)
}

fn finish(name: String, meta: Metadata, roles: Vec<RoleEntry>) -> Assembly {
    let ordination_date = ordination_date(&roles);

    let Some(ordained) = ordination_date.as_deref() else {
        debug!(name = %name, "dropping person with no dated roles");
        return Assembly::NoEvidence { name };
    };
    let any_past = roles.iter().any(|r| r.start_date.as_str() < PLAUSIBILITY_CUTOFF);
    if !any_past && ordained >= PLAUSIBILITY_CUTOFF {
        debug!(name = %name, ordained, "dropping person with only future-dated roles");
        return Assembly::Implausible { name };
    }

    Assembly::Person(PersonRecord {
        id: slug(&name),
        name,
        birth_date: meta.birth_date,
        death_date: meta.death_date,
        ordination_date,
        image_url: meta.image_url,
        roles,
    })
}

/// Earliest tenure start. Canonical dates sort chronologically as strings.
pub fn ordination_date(roles: &[RoleEntry]) -> Option<String> {
    roles.iter().map(|r| &r.start_date).min().cloned()
}

/// Name line without any number of repeated `Name:` labels.
pub fn clean_name(line: &str) -> String {
    let mut name = line.trim();
    while let Some(rest) = name.strip_prefix(NAME_LABEL) {
        name = rest.trim_start();
    }
    name.trim().to_string()
}

pub fn slug(name: &str) -> String {
    name.to_lowercase().replace('.', "").replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RoleType;

    fn block<'a>(name_line: &'a str, lines: &[&'a str]) -> PersonBlock<'a> {
        PersonBlock {
            name_line,
            lines: lines.to_vec(),
        }
    }

    fn role(start: &str) -> RoleEntry {
        RoleEntry {
            kind: RoleType::Apostle,
            raw_role: "Apostle".into(),
            start_date: start.into(),
            end_date: None,
        }
    }

    fn expect_person(a: Assembly) -> PersonRecord {
        match a {
            Assembly::Person(p) => p,
            other => panic!("expected a person, got {other:?}"),
        }
    }

    #[test]
    fn jane_doe() {
        let b = block(
            "Name: Jane Doe",
            &[
                "Born: January 1, 1930",
                "Apostle, April 6, 1980 (1980-04-06)",
                "President of the Church, April 6, 1990 (1990-04-06) – present",
            ],
        );
        let p = expect_person(assemble(&b, &LinkTable::default()));
        assert_eq!(p.id, "jane-doe");
        assert_eq!(p.name, "Jane Doe");
        assert_eq!(p.birth_date.as_deref(), Some("1930-01-01"));
        assert_eq!(p.death_date, None);
        assert_eq!(p.ordination_date.as_deref(), Some("1980-04-06"));
        let kinds: Vec<RoleType> = p.roles.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RoleType::Apostle, RoleType::President]);
    }

    #[test]
    fn metadata_lines_and_image() {
        let links = LinkTable::parse("3. https://example.org/hbl.jpg");
        let b = block(
            "Name: Harold B. Lee",
            &[
                "Born: March 28, 1899 (1899-03-28)",
                "Died: December 26, 1973 (1973-12-26) (aged 74)",
                "Image: portrait [3]",
                "Apostle, April 10, 1941 (1941-04-10) – December 26, 1973 (1973-12-26)",
            ],
        );
        let p = expect_person(assemble(&b, &links));
        assert_eq!(p.id, "harold-b-lee");
        assert_eq!(p.birth_date.as_deref(), Some("1899-03-28"));
        assert_eq!(p.death_date.as_deref(), Some("1973-12-26"));
        assert_eq!(p.image_url.as_deref(), Some("https://example.org/hbl.jpg"));
        assert_eq!(p.roles.len(), 1);
    }

    #[test]
    fn unresolved_image_is_null() {
        let b = block("Name: A", &["Image: [9]", "Apostle, April 6, 1980 (1980-04-06)"]);
        let p = expect_person(assemble(&b, &LinkTable::default()));
        assert_eq!(p.image_url, None);
    }

    #[test]
    fn ordination_is_earliest_start_not_first_listed() {
        let b = block(
            "Name: B",
            &[
                "President of the Church, April 6, 1990 (1990-04-06) – present",
                "Apostle, April 6, 1980 (1980-04-06)",
            ],
        );
        let p = expect_person(assemble(&b, &LinkTable::default()));
        assert_eq!(p.ordination_date.as_deref(), Some("1980-04-06"));
        assert_eq!(p.roles[0].kind, RoleType::President);
    }

    #[test]
    fn no_roles_is_dropped() {
        let b = block("Name: Nobody", &["Born: 1900", "Author of several books"]);
        assert_eq!(
            assemble(&b, &LinkTable::default()),
            Assembly::NoEvidence { name: "Nobody".into() }
        );
    }

    #[test]
    fn only_future_role_from_text_is_dropped() {
        let b = block("Name: Future", &["Apostle, June 1, 2025 (2025-06-01) – present"]);
        assert!(matches!(assemble(&b, &LinkTable::default()), Assembly::NoEvidence { .. }));
    }

    #[test]
    fn only_future_roles_are_implausible() {
        let a = finish("Future".into(), Metadata::default(), vec![role("2025-06-01")]);
        assert_eq!(a, Assembly::Implausible { name: "Future".into() });

        let a = finish("Later".into(), Metadata::default(), vec![role("2031-01-01"), role("2026-02-02")]);
        assert!(matches!(a, Assembly::Implausible { .. }));
    }

    #[test]
    fn one_past_role_keeps_the_person() {
        let a = finish("Mixed".into(), Metadata::default(), vec![role("2026-06-01"), role("1999-01-01")]);
        let p = expect_person(a);
        assert_eq!(p.ordination_date.as_deref(), Some("1999-01-01"));
        assert_eq!(p.roles.len(), 2);
    }

    #[test]
    fn cutoff_day_itself_is_future() {
        let a = finish("Edge".into(), Metadata::default(), vec![role("2025-01-01")]);
        assert!(matches!(a, Assembly::Implausible { .. }));
        let a = finish("Edge".into(), Metadata::default(), vec![role("2024-12-31")]);
        assert!(matches!(a, Assembly::Person(_)));
    }

    #[test]
    fn repeated_name_label() {
        assert_eq!(clean_name("Name: Name: Jane Doe"), "Jane Doe");
        assert_eq!(clean_name("  Name:Jane Doe "), "Jane Doe");
    }

    #[test]
    fn slug_rules() {
        assert_eq!(slug("Dieter F. Uchtdorf"), "dieter-f-uchtdorf");
        assert_eq!(slug("D. Todd Christofferson"), "d-todd-christofferson");
        assert_eq!(slug("Jane Doe"), "jane-doe");
    }

    #[test]
    fn ordination_of_nothing() {
        assert_eq!(ordination_date(&[]), None);
    }
}
