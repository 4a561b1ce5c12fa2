//! Declension table flattening.

use std::collections::BTreeMap;

use crate::vocabulary::types::Declension;

/// Prefix of every flattened declension attribute key.
pub const DECLENSION_KEY_PREFIX: &str = "declension-";

/// Flatten a declension into comparable key-value attributes.
///
/// The cell at zero-based (row i, col j) lands under `declension-{i}-{j}`.
/// The [`Declension::Unknown`] sentinel flattens to an empty map, which is
/// distinct from an absent `declension` field (the caller adds no keys at
/// all in that case). Ragged rows simply contribute fewer keys.
pub fn flatten_declension(declension: &Declension) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();

    let Declension::Table(rows) = declension else {
        return attributes;
    };

    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            attributes.insert(format!("{DECLENSION_KEY_PREFIX}{i}-{j}"), cell.clone());
        }
    }

    attributes
}
