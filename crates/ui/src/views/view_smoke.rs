use quiz_core::model::{Level, WordBankDraft, WordEntryDraft};
use services::StaticWordBanks;

use super::test_harness::{setup_view_harness, setup_view_harness_with_banks};
use crate::vm::QuizVm;

#[test]
fn menu_view_smoke_lists_levels() {
    let mut harness = setup_view_harness(None, None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Kelime Oyunu"), "missing title in {html}");
    assert!(html.contains("Başlamak için bir seviye seçin"), "missing prompt in {html}");
    for label in ["A1", "A2-B1", "B2+"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
}

#[test]
fn start_level_opens_the_first_question() {
    let mut harness = setup_view_harness(Some(Level::A1), None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("black"), "missing term in {html}");
    for choice in ["beyaz", "siyah", "yeşil", "mavi"] {
        assert!(html.contains(choice), "missing {choice} in {html}");
    }
    assert!(html.contains("1 / 22"), "missing progress in {html}");
    assert!(html.contains("Doğru Cevaplar: 0"), "missing count in {html}");
}

fn answer_first_wrong(vm: &mut QuizVm) {
    vm.select_level(Level::A2B1).unwrap();
    vm.choose("gelişmiş").unwrap();
}

#[test]
fn game_view_smoke_shows_feedback() {
    let mut harness = setup_view_harness(None, Some(answer_first_wrong));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("bold"), "missing second term in {html}");
    assert!(html.contains("Yanlış! forever = ebediyen"), "missing feedback in {html}");
    assert!(html.contains("2 / 22"), "missing progress in {html}");
}

fn finish_b2_plus(vm: &mut QuizVm) {
    vm.select_level(Level::B2Plus).unwrap();
    while let Some(screen) = vm.game_screen() {
        let answer = vm
            .controller()
            .active_bank()
            .and_then(|bank| bank.answer(&screen.term))
            .unwrap()
            .to_string();
        vm.choose(&answer).unwrap();
    }
}

#[test]
fn result_view_smoke_shows_final_score() {
    let mut harness = setup_view_harness(None, Some(finish_b2_plus));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Tebrikler!"), "missing title in {html}");
    assert!(html.contains("Doğru Cevaplar: 22"), "missing count in {html}");
    assert!(html.contains("Tekrar"), "missing play again in {html}");
    assert!(html.contains("Menü"), "missing menu in {html}");
}

#[test]
fn missing_start_level_stays_on_menu_with_error() {
    let a1_only = StaticWordBanks::from_drafts(vec![WordBankDraft::new(
        Level::A1,
        vec![WordEntryDraft::new("cat", ["kedi", "köpek"], "kedi")],
    )])
    .unwrap();
    let mut harness = setup_view_harness_with_banks(a1_only, Some(Level::B2Plus), None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Başlamak için bir seviye seçin"), "missing menu in {html}");
    assert!(html.contains("B2+ seviyesi yüklenemedi."), "missing error in {html}");
    assert!(!html.contains("kedi"), "question shown in {html}");
}
