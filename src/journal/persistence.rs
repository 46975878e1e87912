use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::models::MealEntry;

/// On-disk shapes the journal may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum JournalFile {
    Entries(Vec<MealEntry>),
    UserDocument {
        #[serde(default)]
        entries: Vec<MealEntry>,
    },
}

/// Parse journal JSON: a bare array of entries, or a per-user document
/// with an `entries` array.
///
/// Deduplicates by id (last occurrence wins, keeping its first position).
/// Entries without an id are all kept.
pub fn parse_entries(json: &str) -> Result<Vec<MealEntry>> {
    let file: JournalFile = serde_json::from_str(json)?;
    let entries = match file {
        JournalFile::Entries(entries) => entries,
        JournalFile::UserDocument { entries } => entries,
    };

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<MealEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.id.clone() {
            Some(id) => match index.get(&id) {
                Some(&pos) => deduped[pos] = entry,
                None => {
                    index.insert(id, deduped.len());
                    deduped.push(entry);
                }
            },
            None => deduped.push(entry),
        }
    }

    Ok(deduped)
}

/// Load meal entries from a JSON file.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<MealEntry>> {
    let content = fs::read_to_string(path.as_ref())?;
    let entries = parse_entries(&content)?;
    debug!(path = %path.as_ref().display(), count = entries.len(), "loaded journal");
    Ok(entries)
}
