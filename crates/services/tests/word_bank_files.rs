use std::io::Write;

use quiz_core::model::Level;
use services::{ProviderError, QuizSessionController, StaticWordBanks, WordBankProvider};

const CUSTOM_BANKS: &str = r#"[
    {
        "level": "A1",
        "entries": [
            { "term": "cat", "choices": ["kedi", "köpek"], "answer": "kedi" },
            { "term": "dog", "choices": ["kedi", "köpek"], "answer": "köpek" }
        ]
    },
    {
        "level": "B2+",
        "entries": [
            { "term": "fame", "choices": ["alev", "ün", "hata", "özellik"], "answer": "ün" }
        ]
    }
]"#;

#[test]
fn loads_banks_from_file_and_plays_them() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CUSTOM_BANKS.as_bytes()).unwrap();

    let banks = StaticWordBanks::from_path(file.path()).unwrap();
    assert_eq!(banks.levels(), vec![Level::A1, Level::B2Plus]);
    assert_eq!(banks.sizes(), vec![(Level::A1, 2), (Level::B2Plus, 1)]);

    let mut controller = QuizSessionController::new();
    controller.select_level(banks.bank(Level::B2Plus).unwrap());
    let outcome = controller.submit_answer("ün").unwrap();
    assert!(outcome.is_correct);
    assert!(outcome.session_finished);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = StaticWordBanks::from_path(&path).unwrap_err();
    match err {
        ProviderError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
