use std::collections::BTreeMap;

use crate::error::{Result, ToolError};
use crate::model::{ClassEntry, ClassificationRecord, SpeciesEntry};

/// Sorts classification records by class name, then species name. The sort
/// is stable, so records with equal keys keep their relative input order.
/// Quadrant and value fields do not participate in the ordering.
pub fn sort_records(records: &mut [ClassificationRecord]) {
    records.sort_by(|lhs, rhs| {
        lhs.class
            .cmp(&rhs.class)
            .then_with(|| lhs.species.cmp(&rhs.species))
    });
}

/// Folds the records into the nested output document.
///
/// Classes and species are resolved by name against the entries built so
/// far, so the grouping itself does not depend on the record order; only
/// the sequence position of each entry does (first seen wins). Feeding
/// records sorted with [`sort_records`] therefore yields entries in
/// (class, species) order.
pub fn build_document(
    records: &[ClassificationRecord],
    info: &BTreeMap<String, String>,
) -> Result<Vec<ClassEntry>> {
    let mut classes: Vec<ClassEntry> = Vec::new();

    for record in records {
        let class_index = match classes.iter().position(|entry| entry.name == record.class) {
            Some(index) => index,
            None => {
                let text = info.get(&record.class).cloned().unwrap_or_default();
                classes.push(ClassEntry::new(record.class.clone(), text));
                classes.len() - 1
            }
        };
        let class_entry = &mut classes[class_index];

        let species_index = match class_entry
            .species
            .iter()
            .position(|entry| entry.name == record.species)
        {
            Some(index) => index,
            None => {
                class_entry
                    .species
                    .push(SpeciesEntry::new(record.species.clone()));
                class_entry.species.len() - 1
            }
        };
        let species_entry = &mut class_entry.species[species_index];

        let quad_index = match species_entry
            .quad
            .iter()
            .position(|quad| quad == &record.quadrant)
        {
            Some(index) => index,
            None => {
                species_entry.quad.push(record.quadrant.clone());
                species_entry.value.push(Vec::new());
                species_entry.quad.len() - 1
            }
        };

        let value: i64 = record
            .value
            .trim()
            .parse()
            .map_err(|_| ToolError::InvalidValue {
                line: record.line,
                value: record.value.clone(),
            })?;

        let values = &mut species_entry.value[quad_index];
        if !values.contains(&value) {
            values.push(value);
        }
    }

    Ok(classes)
}
