use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Label shown when a reference row is missing for an indicator.
pub const UNAVAILABLE_LABEL: &str = "Data Tidak Tersedia";

/// Machine-readable meaning of a status label. Display labels differ per
/// indicator and category; consumers branch on this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatusTag {
    /// Gizi Buruk, Sangat Kurus.
    SeverelyUnderweight,
    /// Gizi Kurang, Kurus.
    Underweight,
    Normal,
    /// Sangat Pendek.
    SeverelyStunted,
    /// Pendek.
    Stunted,
    /// Tinggi.
    Tall,
    /// Berisiko Gizi Lebih.
    OverweightRisk,
    /// Gizi Lebih, Gemuk.
    Overweight,
    /// Obesitas.
    Obese,
    /// Obesitas Sentral.
    CentralObesity,
    /// Risiko KEK.
    KekRisk,
    /// No reference row for the lookup.
    Unavailable,
}

impl StatusTag {
    pub fn is_undernourished(&self) -> bool {
        matches!(self, StatusTag::SeverelyUnderweight | StatusTag::Underweight)
    }

    pub fn is_stunted(&self) -> bool {
        matches!(self, StatusTag::SeverelyStunted | StatusTag::Stunted)
    }

    /// Overweight or obese. The at-risk band is not included.
    pub fn is_overnourished(&self) -> bool {
        matches!(self, StatusTag::Overweight | StatusTag::Obese)
    }

    pub fn bucket(&self) -> StatusBucket {
        match self {
            StatusTag::SeverelyUnderweight => StatusBucket::GiziBuruk,
            StatusTag::Underweight => StatusBucket::GiziKurang,
            StatusTag::Normal => StatusBucket::GiziBaik,
            StatusTag::OverweightRisk | StatusTag::Overweight => StatusBucket::GiziLebih,
            StatusTag::Obese | StatusTag::CentralObesity => StatusBucket::Obesitas,
            StatusTag::SeverelyStunted
            | StatusTag::Stunted
            | StatusTag::Tall
            | StatusTag::KekRisk
            | StatusTag::Unavailable => StatusBucket::Lainnya,
        }
    }
}

/// Dashboard bucket for status distribution counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatusBucket {
    GiziBuruk,
    GiziKurang,
    GiziBaik,
    GiziLebih,
    Obesitas,
    Lainnya,
}
