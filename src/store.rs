use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::records::PersonRecord;

/// Read the raw scrape. A missing file is `Ok(None)`, not an error.
pub fn read_source(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "input not found, emitting empty result");
            Ok(None)
        }
        Err(source) => Err(AppError::Io {
            action: "read",
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn to_json(people: &[PersonRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(people)?
    } else {
        serde_json::to_string(people)?
    };
    Ok(json)
}

/// Write the records to `path`, or stdout when `None`.
pub fn write_records(people: &[PersonRecord], path: Option<&Path>, pretty: bool) -> Result<()> {
    let json = to_json(people, pretty)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| AppError::Io {
                    action: "create directory",
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(path, json + "\n").map_err(|source| AppError::Io {
                action: "write",
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), people = people.len(), "wrote records");
        }
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{json}").map_err(|source| AppError::Io {
                action: "write",
                path: "<stdout>".into(),
                source,
            })?;
        }
    }
    Ok(())
}
