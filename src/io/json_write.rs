use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::ClassEntry;

/// Serialises the aggregated document and writes it to `path` in a single
/// write, replacing any previous content.
pub fn write_document(path: &Path, document: &[ClassEntry]) -> Result<()> {
    let json_string = serde_json::to_string_pretty(document)?;
    fs::write(path, json_string)?;
    Ok(())
}
