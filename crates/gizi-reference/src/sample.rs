//! Seed rows used for demos and tests. Values are the WHO/Kemenkes
//! anchors for boys at 23 months (BB/U, TB/U) and at 60 cm and 80 cm
//! (BB/TB). Not a complete table.

use gizi_core::models::reference::{ReferenceRow, ReferenceTable};
use gizi_core::models::subject::Gender;

use crate::error::ReferenceError;
use crate::store::ReferenceStore;

fn age_row(gender: Gender, age_months: u32, anchors: [f64; 7]) -> ReferenceRow {
    let [neg3sd, neg2sd, neg1sd, median, pos1sd, pos2sd, pos3sd] = anchors;
    ReferenceRow {
        gender,
        age_months: Some(age_months),
        height: None,
        neg3sd,
        neg2sd,
        neg1sd,
        median,
        pos1sd,
        pos2sd,
        pos3sd,
    }
}

fn height_row(gender: Gender, height: f64, anchors: [f64; 7]) -> ReferenceRow {
    ReferenceRow {
        age_months: None,
        height: Some(height),
        ..age_row(gender, 0, anchors)
    }
}

pub fn sample_rows() -> Vec<(ReferenceTable, ReferenceRow)> {
    vec![
        (
            ReferenceTable::BalitaBbu,
            age_row(Gender::Male, 23, [8.9, 9.8, 10.8, 12.0, 13.3, 14.8, 16.5]),
        ),
        (
            ReferenceTable::BalitaTbu,
            age_row(Gender::Male, 23, [78.7, 81.3, 84.1, 86.9, 89.8, 92.6, 95.5]),
        ),
        (
            ReferenceTable::BalitaBbtb,
            height_row(Gender::Male, 60.0, [4.7, 5.1, 5.5, 6.0, 6.6, 7.2, 7.9]),
        ),
        (
            ReferenceTable::BalitaBbtb,
            height_row(Gender::Male, 80.0, [8.6, 9.4, 10.3, 11.2, 12.3, 13.4, 14.7]),
        ),
    ]
}

pub fn sample_store() -> Result<ReferenceStore, ReferenceError> {
    let mut store = ReferenceStore::new();
    for (table, row) in sample_rows() {
        store.insert(table, row)?;
    }
    Ok(store)
}
