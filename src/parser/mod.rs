pub mod dates;
pub mod document;
pub mod links;
pub mod person;
pub mod range;
pub mod roles;
pub mod segment;

use std::collections::{BTreeMap, HashSet};

use tracing::{info, warn};

use crate::records::{PersonRecord, RoleType};
use links::LinkTable;
use person::Assembly;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseCounts {
    pub blocks: usize,
    pub people: usize,
    pub dropped_no_roles: usize,
    pub dropped_implausible: usize,
    pub roles: BTreeMap<RoleType, usize>,
    pub links: usize,
    pub duplicate_ids: Vec<String>,
}

impl ParseCounts {
    pub fn total_roles(&self) -> usize {
        self.roles.values().sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub people: Vec<PersonRecord>,
    pub counts: ParseCounts,
}

/// Text → person blocks + link table → person records, in document order.
pub fn parse_document(text: &str) -> ParsedDocument {
    let doc = document::split(text);
    let links = LinkTable::parse(&doc.links);

    let mut counts = ParseCounts {
        blocks: doc.people.len(),
        links: links.len(),
        ..Default::default()
    };
    let mut people = Vec::new();
    let mut seen_ids = HashSet::new();

    for block in &doc.people {
        match person::assemble(block, &links) {
            Assembly::Person(p) => {
                if !seen_ids.insert(p.id.clone()) {
                    warn!(id = %p.id, "duplicate person id");
                    counts.duplicate_ids.push(p.id.clone());
                }
                for role in &p.roles {
                    *counts.roles.entry(role.kind).or_default() += 1;
                }
                people.push(p);
            }
            Assembly::NoEvidence { .. } => counts.dropped_no_roles += 1,
            Assembly::Implausible { .. } => counts.dropped_implausible += 1,
        }
    }
    counts.people = people.len();

    info!(
        blocks = counts.blocks,
        people = counts.people,
        roles = counts.total_roles(),
        links = counts.links,
        "parsed document"
    );

    ParsedDocument { people, counts }
}

// ── Tests ──
