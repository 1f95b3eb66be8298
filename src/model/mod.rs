use serde::{Deserialize, Serialize};

/// A single data row of the classification table: one observation of a
/// species inside a quadrant of the atlas grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRecord {
    /// Top-level taxonomic class the observation belongs to.
    pub class: String,
    /// Species name, nested under the class.
    pub species: String,
    /// Quadrant label the observation was recorded in.
    pub quadrant: String,
    /// Raw value field. It is parsed to an integer during aggregation so
    /// the offending text is still available when parsing fails.
    pub value: String,
    /// 1-based line number in the source table, kept for diagnostics.
    pub line: u64,
}

/// One class entry of the output document.
///
/// Fields are declared in lexicographic order; the document contract
/// requires sorted object keys and serde_json emits struct fields in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Descriptive text for the class, or the empty string when the info
    /// table has no entry for it.
    pub info: String,
    /// Class name, unique within the document.
    pub name: String,
    /// Species recorded for this class.
    pub species: Vec<SpeciesEntry>,
}

impl ClassEntry {
    /// Creates an entry for the named class with no species yet.
    pub fn new(name: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            info: info.into(),
            name: name.into(),
            species: Vec::new(),
        }
    }
}

/// One species entry nested under a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    /// Species name, unique within its parent class.
    pub name: String,
    /// Distinct quadrant labels, in first-seen order.
    pub quad: Vec<String>,
    /// `value[i]` holds the distinct integers recorded in `quad[i]`, in
    /// first-seen order. Always the same length as `quad`.
    pub value: Vec<Vec<i64>>,
}

impl SpeciesEntry {
    /// Creates an entry for the named species with no observations yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quad: Vec::new(),
            value: Vec::new(),
        }
    }
}
