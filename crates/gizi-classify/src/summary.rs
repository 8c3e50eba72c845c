//! Population counts over calculation results, bucketed by the typed
//! status of each result's primary indicator.

use gizi_core::models::category::Category;
use gizi_core::models::result::CalculationResult;
use gizi_core::models::status::StatusBucket;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusDistribution {
    pub gizi_buruk: u32,
    pub gizi_kurang: u32,
    pub gizi_baik: u32,
    pub gizi_lebih: u32,
    pub obesitas: u32,
    pub lainnya: u32,
}

impl StatusDistribution {
    pub fn add(&mut self, bucket: StatusBucket) {
        let slot = match bucket {
            StatusBucket::GiziBuruk => &mut self.gizi_buruk,
            StatusBucket::GiziKurang => &mut self.gizi_kurang,
            StatusBucket::GiziBaik => &mut self.gizi_baik,
            StatusBucket::GiziLebih => &mut self.gizi_lebih,
            StatusBucket::Obesitas => &mut self.obesitas,
            StatusBucket::Lainnya => &mut self.lainnya,
        };
        *slot += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryCounts {
    pub balita: u32,
    pub remaja: u32,
    pub dewasa: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementSummary {
    pub total: u32,
    pub by_category: CategoryCounts,
    pub by_status: StatusDistribution,
}

impl MeasurementSummary {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a CalculationResult>) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.add(result);
        }
        summary
    }

    pub fn add(&mut self, result: &CalculationResult) {
        self.total += 1;
        match result.category() {
            Category::Balita => self.by_category.balita += 1,
            Category::Remaja => self.by_category.remaja += 1,
            Category::Dewasa => self.by_category.dewasa += 1,
        }
        self.by_status.add(result.result.primary_tag().bucket());
    }
}
