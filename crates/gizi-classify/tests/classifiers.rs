use gizi_classify::Classifier;
use gizi_classify::classifiers::balita::{
    Balita, adjust_height, height_for_age_band, weight_for_height_band,
};
use gizi_classify::classifiers::dewasa::{Dewasa, bmi_band, central_obesity, lila};
use gizi_classify::classifiers::remaja::{Remaja, bmi_for_age_band};
use gizi_core::age::AgeAtMeasurement;
use gizi_core::models::category::Category;
use gizi_core::models::measurement::{MeasurementInput, MeasurementPosture};
use gizi_core::models::reference::{ReferenceRow, ReferenceTable};
use gizi_core::models::result::CategoryResult;
use gizi_core::models::status::{StatusTag, UNAVAILABLE_LABEL};
use gizi_core::models::subject::Gender;
use gizi_reference::sample::sample_store;
use gizi_reference::store::ReferenceStore;
use jiff::civil::date;

const EPS: f64 = 1e-9;

fn age(months: u32, category: Category) -> AgeAtMeasurement {
    AgeAtMeasurement {
        months,
        years: months / 12,
        category,
    }
}

fn row(gender: Gender, age_months: u32, median: f64) -> ReferenceRow {
    ReferenceRow {
        gender,
        age_months: Some(age_months),
        height: None,
        neg3sd: median - 3.0,
        neg2sd: median - 2.0,
        neg1sd: median - 1.0,
        median,
        pos1sd: median + 1.0,
        pos2sd: median + 2.0,
        pos3sd: median + 3.0,
    }
}

fn balita(result: CategoryResult) -> gizi_core::models::result::BalitaResult {
    match result {
        CategoryResult::Balita(b) => b,
        other => panic!("expected balita result, got {other:?}"),
    }
}

fn dewasa(result: CategoryResult) -> gizi_core::models::result::DewasaResult {
    match result {
        CategoryResult::Dewasa(d) => d,
        other => panic!("expected dewasa result, got {other:?}"),
    }
}

// --- balita ---

#[test]
fn standing_height_under_two_is_raised() {
    let h = adjust_height(70.0, 18, Some(MeasurementPosture::Standing));
    assert!((h - 70.7).abs() < EPS);
}

#[test]
fn lying_length_from_two_is_lowered() {
    let h = adjust_height(90.0, 30, Some(MeasurementPosture::Lying));
    assert!((h - 89.3).abs() < EPS);
}

#[test]
fn matching_or_missing_posture_keeps_height() {
    assert_eq!(adjust_height(70.0, 18, None), 70.0);
    assert_eq!(adjust_height(70.0, 18, Some(MeasurementPosture::Lying)), 70.0);
    assert_eq!(adjust_height(90.0, 24, Some(MeasurementPosture::Standing)), 90.0);
}

#[test]
fn median_toddler_scores_normal_on_all_indicators() {
    let refs = sample_store().unwrap();
    let input = MeasurementInput::new(date(2023, 12, 15), 12.0, 86.9);

    let b = balita(Balita.classify(Gender::Male, &age(23, Category::Balita), &input, &refs));

    assert_eq!(b.tbu.zscore, Some(0.0));
    assert_eq!(b.tbu.status, "Normal");
    assert_eq!(b.bbu.zscore, Some(0.0));
    assert_eq!(b.bbu.status, "Gizi Baik");

    // 87.0 cm has no row; the 80 cm row is nearest.
    let z = b.bbtb.zscore.unwrap();
    assert!((z - 0.73).abs() < 1e-6);
    assert_eq!(b.bbtb.tag, StatusTag::Normal);
}

#[test]
fn age_beyond_sixty_months_scores_like_sixty() {
    let mut refs = ReferenceStore::new();
    refs.insert(ReferenceTable::BalitaBbu, row(Gender::Female, 60, 18.2))
        .unwrap();
    let input = MeasurementInput::new(date(2024, 1, 1), 17.0, 108.0);

    let at_70 = balita(Balita.classify(Gender::Female, &age(70, Category::Balita), &input, &refs));
    let at_60 = balita(Balita.classify(Gender::Female, &age(60, Category::Balita), &input, &refs));
    assert_eq!(at_70.bbu, at_60.bbu);
    assert!(at_70.bbu.is_available());
}

#[test]
fn missing_rows_degrade_single_indicators() {
    let mut refs = ReferenceStore::new();
    refs.insert(ReferenceTable::BalitaBbu, row(Gender::Male, 12, 9.6))
        .unwrap();
    let input = MeasurementInput::new(date(2024, 1, 1), 9.6, 75.0);

    let b = balita(Balita.classify(Gender::Male, &age(12, Category::Balita), &input, &refs));

    assert_eq!(b.bbu.zscore, Some(0.0));
    assert_eq!(b.tbu.zscore, None);
    assert_eq!(b.tbu.status, UNAVAILABLE_LABEL);
    assert_eq!(b.bbtb.tag, StatusTag::Unavailable);
}

#[test]
fn degenerate_row_is_flagged_on_indicator() {
    let mut refs = ReferenceStore::new();
    let mut flat = row(Gender::Male, 12, 9.6);
    flat.pos1sd = flat.median;
    refs.insert(ReferenceTable::BalitaBbu, flat).unwrap();
    let input = MeasurementInput::new(date(2024, 1, 1), 11.0, 75.0);

    let b = balita(Balita.classify(Gender::Male, &age(12, Category::Balita), &input, &refs));
    assert_eq!(b.bbu.zscore, Some(0.0));
    assert!(b.bbu.degenerate_reference);
}

#[test]
fn balita_band_edges() {
    assert_eq!(height_for_age_band(-2.0).label, "Normal");
    assert_eq!(height_for_age_band(-2.01).label, "Pendek");
    assert_eq!(height_for_age_band(-3.01).label, "Sangat Pendek");
    assert_eq!(height_for_age_band(3.01).label, "Tinggi");

    assert_eq!(weight_for_height_band(1.0).label, "Gizi Baik");
    assert_eq!(weight_for_height_band(1.5).label, "Berisiko Gizi Lebih");
    assert_eq!(weight_for_height_band(2.5).tag, StatusTag::Overweight);
    assert_eq!(weight_for_height_band(3.5).tag, StatusTag::Obese);
}

// --- remaja ---

#[test]
fn remaja_age_clamps_to_table_domain() {
    let mut refs = ReferenceStore::new();
    refs.extend(
        ReferenceTable::RemajaImtu,
        [row(Gender::Male, 61, 15.3), row(Gender::Male, 216, 22.0)],
    )
    .unwrap();
    let input = MeasurementInput::new(date(2024, 1, 1), 40.0, 150.0);

    let classify = |months| Remaja.classify(Gender::Male, &age(months, Category::Remaja), &input, &refs);
    assert_eq!(classify(50), classify(61));
    assert_eq!(classify(300), classify(216));
    assert_ne!(classify(61), classify(216));
}

#[test]
fn remaja_bands() {
    assert_eq!(bmi_for_age_band(-3.1).label, "Gizi Buruk");
    assert_eq!(bmi_for_age_band(-3.0).label, "Gizi Kurang");
    assert_eq!(bmi_for_age_band(-2.0).label, "Gizi Baik");
    assert_eq!(bmi_for_age_band(1.0).label, "Gizi Baik");
    assert_eq!(bmi_for_age_band(2.0).label, "Gizi Lebih");
    assert_eq!(bmi_for_age_band(2.01).label, "Obesitas");
}

#[test]
fn remaja_reports_rounded_bmi() {
    let refs = ReferenceStore::new();
    let input = MeasurementInput::new(date(2024, 1, 1), 60.0, 160.0);

    match Remaja.classify(Gender::Female, &age(150, Category::Remaja), &input, &refs) {
        CategoryResult::Remaja(r) => {
            assert_eq!(r.bmi, 23.44);
            assert_eq!(r.imtu.status, UNAVAILABLE_LABEL);
        }
        other => panic!("expected remaja result, got {other:?}"),
    }
}

// --- dewasa ---

#[test]
fn adult_bmi_just_over_seventeen_is_kurus() {
    let refs = ReferenceStore::new();
    let input = MeasurementInput::new(date(2024, 6, 1), 51.0, 173.0);

    let d = dewasa(Dewasa.classify(Gender::Male, &age(400, Category::Dewasa), &input, &refs));
    assert_eq!(d.status, "Kurus");
    assert_eq!(d.reason, "IMT 17.0 - 18.4");
    assert_eq!(d.tag, StatusTag::Underweight);
    assert_eq!(d.bmi, 17.04);
    assert!(d.central_obesity.is_none());
}

#[test]
fn adult_bmi_bands() {
    assert_eq!(bmi_band(16.9).label, "Sangat Kurus");
    assert_eq!(bmi_band(18.5).label, "Normal");
    assert_eq!(bmi_band(25.0).label, "Normal");
    assert_eq!(bmi_band(25.01).label, "Gemuk");
    assert_eq!(bmi_band(27.0).label, "Gemuk");
    assert_eq!(bmi_band(27.01).label, "Obesitas");
}

#[test]
fn waist_at_threshold_is_normal() {
    let at = central_obesity(Gender::Male, Some(90.0), false).unwrap();
    assert_eq!(at.has_central_obesity, Some(false));
    assert_eq!(at.status, "Normal");

    let over = central_obesity(Gender::Male, Some(90.1), false).unwrap();
    assert_eq!(over.has_central_obesity, Some(true));
    assert_eq!(over.status, "Obesitas Sentral");
    assert_eq!(over.threshold, Some(90.0));
    assert_eq!(over.difference, Some(0.1));

    let female = central_obesity(Gender::Female, Some(85.0), false).unwrap();
    assert_eq!(female.has_central_obesity, Some(true));
}

#[test]
fn pregnancy_skips_waist_check() {
    let c = central_obesity(Gender::Female, Some(999.0), true).unwrap();
    assert_eq!(c.status, "Normal (Hamil)");
    assert_eq!(c.has_central_obesity, None);

    assert!(central_obesity(Gender::Female, None, true).is_some());
    assert!(central_obesity(Gender::Female, None, false).is_none());
}

#[test]
fn lila_threshold() {
    assert_eq!(lila(23.4).tag, StatusTag::KekRisk);
    assert_eq!(lila(23.5).status, "Normal");
}

#[test]
fn pregnant_adult_gets_prefixed_status_and_lila() {
    let refs = ReferenceStore::new();
    let mut input = MeasurementInput::new(date(2024, 6, 1), 60.0, 160.0);
    input.is_pregnant = true;
    input.arm_circumference = Some(22.0);
    input.waist_circumference = Some(999.0);

    let d = dewasa(Dewasa.classify(Gender::Female, &age(360, Category::Dewasa), &input, &refs));
    assert_eq!(d.status, "Ibu Hamil (Normal)");
    assert_eq!(d.tag, StatusTag::Normal);
    assert_eq!(d.central_obesity.unwrap().status, "Normal (Hamil)");
    assert_eq!(d.lila.unwrap().status, "Risiko KEK");
}

#[test]
fn arm_circumference_without_pregnancy_is_not_screened() {
    let refs = ReferenceStore::new();
    let mut input = MeasurementInput::new(date(2024, 6, 1), 60.0, 160.0);
    input.arm_circumference = Some(22.0);

    let d = dewasa(Dewasa.classify(Gender::Female, &age(360, Category::Dewasa), &input, &refs));
    assert!(d.lila.is_none());
    assert_eq!(d.status, "Normal");
}

#[test]
fn dewasa_notes_follow_provided_circumferences() {
    let mut input = MeasurementInput::new(date(2024, 6, 1), 60.0, 160.0);
    assert_eq!(Dewasa.reference_notes(Gender::Female, &input).len(), 1);

    input.waist_circumference = Some(70.0);
    input.arm_circumference = Some(25.0);
    let notes = Dewasa.reference_notes(Gender::Female, &input);
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[1].note, "Normal: ≤ 80 cm");
    assert_eq!(notes[2].note, "Normal: ≥ 23.5 cm");
}

// --- validation ---

#[test]
fn validation_reports_each_bad_field() {
    let mut input = MeasurementInput::new(date(2024, 6, 1), 60.0, f64::NAN);
    input.arm_circumference = Some(5.0);

    let errors = Balita.validate(&input, date(2024, 5, 1));
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        ["measurement_date", "weight", "height", "arm_circumference"]
    );
    assert_eq!(errors[1].message, "Berat badan terlalu besar");
    assert_eq!(errors[2].message, "Tinggi badan harus berupa angka");
    assert_eq!(errors[3].message, "Lingkar lengan atas terlalu kecil");
}

#[test]
fn validation_ignores_circumferences_outside_category() {
    let mut input = MeasurementInput::new(date(2024, 6, 1), 60.0, 160.0);
    input.waist_circumference = Some(500.0);
    assert!(Remaja.validate(&input, date(2024, 6, 1)).is_empty());
    assert_eq!(Dewasa.validate(&input, date(2024, 6, 1)).len(), 1);
}

#[test]
fn validation_limits_notes_length() {
    let mut input = MeasurementInput::new(date(2024, 6, 1), 60.0, 160.0);
    input.notes = Some("a".repeat(1001));
    let errors = Dewasa.validate(&input, date(2024, 6, 1));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "notes");
}

// --- registry ---

#[test]
fn registry_covers_each_category_once() {
    let registered: Vec<Category> = gizi_classify::all_classifiers()
        .iter()
        .map(|c| c.category())
        .collect();
    assert_eq!(registered, [Category::Balita, Category::Remaja, Category::Dewasa]);

    for category in registered {
        let classifier = gizi_classify::classifier_for(category);
        assert_eq!(classifier.category(), category);
    }
}

#[test]
fn classifier_names_state_age_range() {
    let names: Vec<String> = gizi_classify::all_classifiers()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(
        names,
        ["Balita (0-60 bulan)", "Remaja (61-216 bulan)", "Dewasa (>18 tahun)"]
    );
}
