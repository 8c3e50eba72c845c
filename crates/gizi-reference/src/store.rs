use std::collections::{BTreeMap, HashMap};

use gizi_core::models::reference::{KeyKind, ReferenceRow, ReferenceTable, height_key};
use gizi_core::models::subject::Gender;

use crate::error::ReferenceError;
use crate::provider::ReferenceProvider;

/// In-memory reference tables, indexed for exact and nearest lookups.
///
/// Age-keyed tables are indexed by month; the BB/TB table by height in
/// tenths of a centimetre.
#[derive(Debug, Default, Clone)]
pub struct ReferenceStore {
    by_age: HashMap<(ReferenceTable, Gender), BTreeMap<u32, ReferenceRow>>,
    by_height: HashMap<Gender, BTreeMap<i32, ReferenceRow>>,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row, rejecting rows without the table's key, duplicate keys
    /// and anchors that decrease from -3 SD to +3 SD.
    pub fn insert(&mut self, table: ReferenceTable, row: ReferenceRow) -> Result<(), ReferenceError> {
        let gender = row.gender;

        match table.key_kind() {
            KeyKind::AgeMonths => {
                let age = row.age_months.ok_or(ReferenceError::MissingKey {
                    table,
                    gender,
                    field: "age_months",
                })?;
                check_monotonic(table, &row, || age.to_string())?;
                if row.is_degenerate() {
                    tracing::warn!(%table, %gender, age, "reference row has a zero-width SD half");
                }

                let rows = self.by_age.entry((table, gender)).or_default();
                if rows.contains_key(&age) {
                    return Err(ReferenceError::DuplicateRow {
                        table,
                        gender,
                        key: age.to_string(),
                    });
                }
                rows.insert(age, row);
            }
            KeyKind::Height => {
                let height = row.height.ok_or(ReferenceError::MissingKey {
                    table,
                    gender,
                    field: "height",
                })?;
                check_monotonic(table, &row, || format!("{height:.1} cm"))?;
                if row.is_degenerate() {
                    tracing::warn!(%table, %gender, height, "reference row has a zero-width SD half");
                }

                let key = height_key(height);
                let rows = self.by_height.entry(gender).or_default();
                if rows.contains_key(&key) {
                    return Err(ReferenceError::DuplicateRow {
                        table,
                        gender,
                        key: format!("{height:.1} cm"),
                    });
                }
                rows.insert(key, row);
            }
        }

        Ok(())
    }

    pub fn extend(
        &mut self,
        table: ReferenceTable,
        rows: impl IntoIterator<Item = ReferenceRow>,
    ) -> Result<(), ReferenceError> {
        for row in rows {
            self.insert(table, row)?;
        }
        Ok(())
    }

    /// Number of rows held for a table, across both genders.
    pub fn len(&self, table: ReferenceTable) -> usize {
        match table.key_kind() {
            KeyKind::AgeMonths => self
                .by_age
                .iter()
                .filter(|((t, _), _)| *t == table)
                .map(|(_, rows)| rows.len())
                .sum(),
            KeyKind::Height => self.by_height.values().map(BTreeMap::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        ReferenceTable::ALL.iter().all(|t| self.len(*t) == 0)
    }
}

fn check_monotonic(
    table: ReferenceTable,
    row: &ReferenceRow,
    key: impl FnOnce() -> String,
) -> Result<(), ReferenceError> {
    if row.is_monotonic() {
        Ok(())
    } else {
        Err(ReferenceError::NonMonotonic {
            table,
            gender: row.gender,
            key: key(),
        })
    }
}

impl ReferenceProvider for ReferenceStore {
    fn row_by_age(
        &self,
        table: ReferenceTable,
        gender: Gender,
        age_months: u32,
    ) -> Option<ReferenceRow> {
        self.by_age
            .get(&(table, gender))
            .and_then(|rows| rows.get(&age_months))
            .cloned()
    }

    fn row_by_height(&self, gender: Gender, height: f64) -> Option<ReferenceRow> {
        self.by_height
            .get(&gender)
            .and_then(|rows| rows.get(&height_key(height)))
            .cloned()
    }

    fn nearest_by_height(&self, gender: Gender, height: f64) -> Option<ReferenceRow> {
        let rows = self.by_height.get(&gender)?;
        let key = height_key(height);

        // Rows keyed below `key` are strictly shorter than `height`, rows keyed
        // above it strictly taller; only the row at `key` itself can sit on
        // either side.
        let candidates = [
            rows.range(..key).next_back().map(|(_, r)| r),
            rows.get(&key),
            rows.range(key + 1..).next().map(|(_, r)| r),
        ];

        let distance = |row: &ReferenceRow| (row.height.unwrap_or(f64::INFINITY) - height).abs();

        // Candidates are in ascending height, so ties go to the shorter row.
        candidates
            .into_iter()
            .flatten()
            .fold(None::<&ReferenceRow>, |best, row| match best {
                Some(b) if distance(b) <= distance(row) => Some(b),
                _ => Some(row),
            })
            .cloned()
    }
}
