//! Reference data file conventions.
//!
//! Pure string functions. These define the canonical layout of the
//! growth-standard tables inside a reference data directory.

use crate::models::reference::ReferenceTable;

pub fn table_file(table: ReferenceTable) -> String {
    format!("{}.json", table.as_str())
}

pub const MANIFEST: &str = "manifest.json";
