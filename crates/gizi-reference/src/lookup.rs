//! Table lookups as the classifiers use them.
//!
//! Age-keyed lookups clamp the age into the table's domain and require an
//! exact row. The BB/TB lookup rounds to the 0.5 cm grid and, failing an
//! exact row, takes the row nearest to the unrounded height.

use gizi_core::models::reference::{ReferenceRow, ReferenceTable, round_to_half_cm};
use gizi_core::models::subject::Gender;

use crate::provider::ReferenceProvider;

/// A row found for a lookup, with the key actually queried.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMatch {
    pub row: ReferenceRow,
    pub key: LookupKey,
    /// The row came from the nearest-height fallback, not an exact match.
    pub nearest: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupKey {
    AgeMonths(u32),
    Height(f64),
}

pub fn lookup_by_age<P: ReferenceProvider + ?Sized>(
    provider: &P,
    table: ReferenceTable,
    gender: Gender,
    age_months: u32,
) -> Option<RowMatch> {
    let lookup_age = table.clamp_age(age_months);

    match provider.row_by_age(table, gender, lookup_age) {
        Some(row) => Some(RowMatch {
            row,
            key: LookupKey::AgeMonths(lookup_age),
            nearest: false,
        }),
        None => {
            tracing::debug!(%table, %gender, age_months, lookup_age, "reference row not found");
            None
        }
    }
}

pub fn lookup_by_height<P: ReferenceProvider + ?Sized>(
    provider: &P,
    gender: Gender,
    height: f64,
) -> Option<RowMatch> {
    let lookup_height = round_to_half_cm(height);

    if let Some(row) = provider.row_by_height(gender, lookup_height) {
        return Some(RowMatch {
            row,
            key: LookupKey::Height(lookup_height),
            nearest: false,
        });
    }

    match provider.nearest_by_height(gender, height) {
        Some(row) => {
            tracing::debug!(
                %gender,
                height,
                lookup_height,
                matched = ?row.height,
                "no exact BB/TB row, using nearest height"
            );
            let matched = row.height.unwrap_or(lookup_height);
            Some(RowMatch {
                row,
                key: LookupKey::Height(matched),
                nearest: true,
            })
        }
        None => {
            tracing::debug!(%gender, height, "no BB/TB rows for gender");
            None
        }
    }
}
