//! Extract structured office-holder records from loosely formatted
//! biographical text.
//!
//! The pipeline is pure: [`parser::parse_document`] takes the whole scrape as
//! a string and returns records in document order. Reading the scrape and
//! writing JSON live in [`store`].

pub mod error;
pub mod parser;
pub mod records;
pub mod settings;
pub mod store;

pub use parser::{parse_document, ParseCounts, ParsedDocument};
pub use records::{PersonRecord, RoleEntry, RoleType};
