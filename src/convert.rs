use std::path::Path;

use tracing::{debug, info, instrument};

use crate::aggregate;
use crate::error::Result;
use crate::io::csv_read;
use crate::io::json_write;

/// Classification table read from the working directory.
pub const SPECIES_TABLE: &str = "species.csv";
/// Info table read from the working directory.
pub const INFO_TABLE: &str = "info.csv";
/// Document written to the working directory.
pub const OUTPUT_DOCUMENT: &str = "species.json";

/// Aggregates the two input tables into the nested atlas document.
///
/// Both tables are read completely before any aggregation happens; the
/// document is written with a single truncating write at the end.
#[instrument(
    level = "info",
    skip_all,
    fields(species = %species_path.display(), info = %info_path.display(), output = %output_path.display())
)]
pub fn csv_to_json(species_path: &Path, info_path: &Path, output_path: &Path) -> Result<()> {
    let mut records = csv_read::read_classification(species_path)?;
    info!(record_count = records.len(), "read classification records");

    let info = csv_read::read_info(info_path)?;
    debug!(class_count = info.len(), "read class info entries");

    aggregate::sort_records(&mut records);
    let document = aggregate::build_document(&records, &info)?;
    info!(class_count = document.len(), "document aggregated");

    json_write::write_document(output_path, &document)
}
