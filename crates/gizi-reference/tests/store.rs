use gizi_core::models::reference::{ReferenceRow, ReferenceTable};
use gizi_core::models::subject::Gender;
use gizi_reference::error::ReferenceError;
use gizi_reference::loader::{ReferenceManifest, load_dir, write_manifest, write_table};
use gizi_reference::provider::ReferenceProvider;
use gizi_reference::sample::{sample_rows, sample_store};
use gizi_reference::store::ReferenceStore;

fn tbu_row(age: u32) -> ReferenceRow {
    ReferenceRow {
        gender: Gender::Female,
        age_months: Some(age),
        height: None,
        neg3sd: 70.0,
        neg2sd: 72.0,
        neg1sd: 74.0,
        median: 76.0,
        pos1sd: 78.0,
        pos2sd: 80.0,
        pos3sd: 82.0,
    }
}

#[test]
fn sample_store_holds_seed_rows() {
    let store = sample_store().unwrap();
    assert_eq!(store.len(ReferenceTable::BalitaBbu), 1);
    assert_eq!(store.len(ReferenceTable::BalitaTbu), 1);
    assert_eq!(store.len(ReferenceTable::BalitaBbtb), 2);
    assert_eq!(store.len(ReferenceTable::RemajaImtu), 0);

    let tbu = store
        .row_by_age(ReferenceTable::BalitaTbu, Gender::Male, 23)
        .unwrap();
    assert_eq!(tbu.median, 86.9);
}

#[test]
fn duplicate_rows_are_rejected() {
    let mut store = ReferenceStore::new();
    store.insert(ReferenceTable::BalitaTbu, tbu_row(12)).unwrap();
    let err = store.insert(ReferenceTable::BalitaTbu, tbu_row(12)).unwrap_err();
    assert!(matches!(err, ReferenceError::DuplicateRow { .. }));
}

#[test]
fn rows_must_carry_their_table_key() {
    let mut store = ReferenceStore::new();
    let err = store
        .insert(ReferenceTable::BalitaBbtb, tbu_row(12))
        .unwrap_err();
    assert!(matches!(err, ReferenceError::MissingKey { field: "height", .. }));
}

#[test]
fn decreasing_anchors_are_rejected() {
    let mut store = ReferenceStore::new();
    let bad = ReferenceRow {
        pos2sd: 10.0,
        ..tbu_row(6)
    };
    let err = store.insert(ReferenceTable::BalitaTbu, bad).unwrap_err();
    assert!(matches!(err, ReferenceError::NonMonotonic { .. }));
}

#[test]
fn tables_round_trip_through_a_directory() {
    let dir = tempfile::tempdir().unwrap();

    for table in ReferenceTable::ALL {
        let rows: Vec<ReferenceRow> = sample_rows()
            .into_iter()
            .filter(|(t, _)| *t == table)
            .map(|(_, r)| r)
            .collect();
        if !rows.is_empty() {
            write_table(dir.path(), table, &rows).unwrap();
        }
    }
    std::fs::write(
        dir.path().join("manifest.json"),
        r#"{"source":"WHO 2006","version":"2020"}"#,
    )
    .unwrap();

    let loaded = load_dir(dir.path()).unwrap();
    assert_eq!(loaded.manifest.unwrap().source, "WHO 2006");
    assert_eq!(loaded.store.len(ReferenceTable::BalitaBbtb), 2);
    assert_eq!(loaded.store.len(ReferenceTable::RemajaImtu), 0);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dir(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, ReferenceError::DirectoryNotFound { .. }));
}

#[test]
fn malformed_table_file_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("balita_tbu.json"), "{not json").unwrap();
    let err = load_dir(dir.path()).unwrap_err();
    match err {
        ReferenceError::Parse { file, .. } => assert!(file.ends_with("balita_tbu.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn written_manifest_is_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = ReferenceManifest {
        source: "PMK No. 2 Tahun 2020".to_string(),
        version: Some("2020".to_string()),
    };

    let path = write_manifest(dir.path(), &manifest).unwrap();
    assert!(path.ends_with("manifest.json"));
    assert_eq!(load_dir(dir.path()).unwrap().manifest, Some(manifest));
}

#[test]
fn write_and_read_failures_are_reported_differently() {
    let source = serde_json::from_str::<u8>("x").unwrap_err();
    let err = ReferenceError::Serialize {
        file: "balita_bbu.json".to_string(),
        source,
    };
    assert!(err.to_string().starts_with("failed to serialize balita_bbu.json"));

    let source = serde_json::from_str::<u8>("x").unwrap_err();
    let err = ReferenceError::Parse {
        file: "balita_bbu.json".to_string(),
        source,
    };
    assert!(err.to_string().starts_with("failed to parse balita_bbu.json"));
}
