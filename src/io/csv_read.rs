use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, ToolError};
use crate::model::ClassificationRecord;

/// Number of fields every classification row must carry.
const CLASSIFICATION_FIELDS: usize = 4;

/// Reads the classification table. The header row is discarded; every
/// remaining row must split into exactly four fields
/// (class, species, quadrant, value).
pub fn read_classification(path: &Path) -> Result<Vec<ClassificationRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |position| position.line());
        if row.len() != CLASSIFICATION_FIELDS {
            return Err(ToolError::MalformedRow {
                line,
                expected: CLASSIFICATION_FIELDS,
                found: row.len(),
            });
        }
        records.push(ClassificationRecord {
            class: row[0].to_string(),
            species: row[1].to_string(),
            quadrant: row[2].to_string(),
            value: row[3].to_string(),
            line,
        });
    }

    Ok(records)
}

/// Reads the info table into a class → text mapping. The header line is
/// discarded; each remaining line is split on the first delimiter only,
/// so delimiter characters inside the info text survive verbatim.
pub fn read_info(path: &Path) -> Result<BTreeMap<String, String>> {
    let source = fs::read_to_string(path)?;

    let mut info = BTreeMap::new();
    for (index, line) in source.lines().enumerate().skip(1) {
        let line = line.trim();
        let (name, text) = line.split_once(',').ok_or_else(|| ToolError::MalformedRow {
            line: index as u64 + 1,
            expected: 2,
            found: 1,
        })?;
        info.insert(name.to_string(), text.to_string());
    }

    Ok(info)
}
