pub mod balita;
pub mod dewasa;
pub mod remaja;

use gizi_core::models::reference::ReferenceTable;
use gizi_core::models::result::IndicatorResult;
use gizi_core::models::status::StatusTag;
use gizi_reference::lookup::RowMatch;

use crate::scoring::{round_to, z_score};

/// A status band: display label, typed tag and the SD-band reason text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub label: &'static str,
    pub tag: StatusTag,
    pub reason: &'static str,
}

impl Band {
    pub const fn new(label: &'static str, tag: StatusTag, reason: &'static str) -> Self {
        Self { label, tag, reason }
    }
}

/// Score `value` against a looked-up row and band the result. `None` for
/// the row yields the unavailable placeholder.
pub(crate) fn score_indicator(
    table: ReferenceTable,
    found: Option<RowMatch>,
    value: f64,
    band: fn(f64) -> Band,
) -> IndicatorResult {
    let Some(found) = found else {
        return IndicatorResult::unavailable();
    };

    let z = z_score(value, &found.row);
    if z.degenerate {
        tracing::warn!(
            %table,
            gender = %found.row.gender,
            key = ?found.key,
            "reference row has zero SD, Z-score forced to 0"
        );
    }

    let b = band(z.value);
    IndicatorResult {
        zscore: Some(round_to(z.value, 2)),
        status: b.label.to_string(),
        tag: b.tag,
        reason: Some(b.reason.to_string()),
        degenerate_reference: z.degenerate,
    }
}
