//! Indonesian-language guidance derived from a classification.
//!
//! Clauses are joined with a single space. Every category has a normal
//! fallback, so the text is never empty.

use gizi_core::models::measurement::MeasurementInput;
use gizi_core::models::result::{BalitaResult, CategoryResult, DewasaResult, RemajaResult};
use gizi_core::models::status::StatusTag;

use crate::classifiers::dewasa::LILA_THRESHOLD_CM;

pub fn recommend(result: &CategoryResult, input: &MeasurementInput) -> String {
    let mut text = match result {
        CategoryResult::Balita(b) => balita(b),
        CategoryResult::Remaja(r) => remaja(r),
        CategoryResult::Dewasa(d) => dewasa(d),
    };

    if input.is_pregnant
        && let Some(arm) = input.arm_circumference
    {
        text.push(' ');
        text.push_str(&pregnancy_clause(arm));
    }

    text
}

/// LILA clause for pregnant subjects, appended regardless of category.
pub fn pregnancy_clause(arm_circumference: f64) -> String {
    if arm_circumference < LILA_THRESHOLD_CM {
        "Berisiko KEK (LILA < 23.5cm). Tingkatkan asupan gizi dan konsultasi dokter.".to_string()
    } else {
        "Lingkar Lengan Atas (LILA) Normal.".to_string()
    }
}

fn balita(result: &BalitaResult) -> String {
    let mut clauses = Vec::new();

    if result.bbtb.tag.is_undernourished() {
        clauses.push(format!(
            "Status Gizi ({}): Segera konsultasi ke RS/Puskesmas. Berikan MP-ASI kaya protein hewani (telur, hati, ikan) dan lemak sehat.",
            result.bbtb.status
        ));
    }

    if result.tbu.tag.is_stunted() {
        clauses.push(format!(
            "Indikasi Stunting ({}): Pastikan asupan protein hewani setiap makan. Perhatikan sanitasi lingkungan dan akses air bersih.",
            result.tbu.status
        ));
    }

    if result.bbtb.tag.is_overnourished() {
        clauses.push(format!(
            "Risiko Obesitas ({}): Batasi konsumsi gula dan camilan olahan. Tingkatkan aktivitas bermain aktif di luar ruangan.",
            result.bbtb.status
        ));
    }

    if clauses.is_empty() {
        clauses.push(
            "Pertumbuhan anak dalam batas normal. Lanjutkan pemberian makanan bergizi seimbang dan imunisasi rutin."
                .to_string(),
        );
    }

    clauses.join(" ")
}

fn remaja(result: &RemajaResult) -> String {
    let tag = result.imtu.tag;

    if tag.is_undernourished() {
        "Status Gizi Kurang: Tingkatkan asupan kalori dan protein. Hindari diet ketat tanpa pengawasan medis."
            .to_string()
    } else if tag.is_overnourished() || tag == StatusTag::OverweightRisk {
        "Risiko Obesitas: Kurangi konsumsi minuman manis dan makanan cepat saji. Lakukan aktivitas fisik minimal 60 menit setiap hari."
            .to_string()
    } else {
        "Status gizi normal. Pertahankan pola makan bergizi dan gaya hidup aktif untuk masa pertumbuhan yang optimal."
            .to_string()
    }
}

fn dewasa(result: &DewasaResult) -> String {
    let mut clauses = Vec::new();

    if result.tag.is_undernourished() {
        clauses.push("Tingkatkan asupan kalori dengan makanan bergizi.");
        clauses.push("Konsultasikan dengan ahli gizi jika diperlukan.");
    } else if result.tag.is_overnourished() {
        clauses.push("Kurangi asupan kalori berlebih.");
        clauses.push("Tingkatkan aktivitas fisik minimal 150 menit per minggu.");
    } else {
        clauses.push("Status gizi normal, pertahankan pola hidup sehat.");
    }

    let central = result
        .central_obesity
        .as_ref()
        .and_then(|c| c.has_central_obesity)
        .unwrap_or(false);
    if central {
        clauses.push("Perhatikan lingkar perut melebihi batas normal (L: ≤90cm, P: ≤80cm).");
        clauses.push("Konsultasi dokter untuk pemeriksaan risiko penyakit metabolik.");
    }

    clauses.join(" ")
}
