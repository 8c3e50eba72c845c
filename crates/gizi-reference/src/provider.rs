use gizi_core::models::reference::{ReferenceRow, ReferenceTable};
use gizi_core::models::subject::Gender;

/// Source of reference rows. Implementations must be read-only: the
/// classifiers call these from any thread without coordination.
pub trait ReferenceProvider: Send + Sync {
    /// Exact match on an age-keyed table.
    fn row_by_age(
        &self,
        table: ReferenceTable,
        gender: Gender,
        age_months: u32,
    ) -> Option<ReferenceRow>;

    /// Exact match on the BB/TB table. `height` is already on the 0.5 cm grid.
    fn row_by_height(&self, gender: Gender, height: f64) -> Option<ReferenceRow>;

    /// BB/TB row whose height is closest to `height`. `None` only when the
    /// table has no rows for the gender.
    fn nearest_by_height(&self, gender: Gender, height: f64) -> Option<ReferenceRow>;
}
