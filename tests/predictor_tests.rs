mod common;

use common::{center, fixture, predictor, shared_model, snapshot, type_word};
use std::sync::Arc;
use tapwise::config::{LayoutParams, PredictorParams};
use tapwise::error::TapwiseError;
use tapwise::predictor::{PredictionResult, PredictorBuildParams, PredictorState, Weighted};

// --- TAP ---

#[test]
fn test_hello_at_key_centers() {
    let mut p = predictor();
    let res = type_word(&mut p, "hello");

    assert_eq!(res.best_completion, "hello");
    assert_eq!(res.full_display_text, "hello");
    assert_eq!(res.suggestions.first().map(String::as_str), Some("hello"));
    assert!(res.suggestions.len() <= 3);
    assert!(p.hypotheses().len() <= 5);
    assert_eq!(p.taps().len(), 5);
    assert_eq!(p.state(), PredictorState::Typing);
}

#[test]
fn test_hypotheses_all_match_tap_count() {
    let mut p = predictor();
    type_word(&mut p, "thi");
    assert!(!p.hypotheses().is_empty());
    for h in p.hypotheses().iter() {
        assert_eq!(h.text().chars().count(), 3);
        assert!(h.weight() > 0.0);
    }
    let weights: Vec<f64> = p.hypotheses().iter().map(|h| h.weight()).collect();
    assert!(weights.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_taps_are_deterministic() {
    let mut a = predictor();
    let mut b = predictor();
    for (x, y) in [(120.0, 150.0), (75.0, 140.0), (230.0, 205.0), (40.0, 190.0)] {
        assert_eq!(a.tap(x, y), b.tap(x, y));
    }
    assert_eq!(snapshot(a.hypotheses()), snapshot(b.hypotheses()));
}

#[test]
fn test_off_keyboard_tap_gives_empty_result() {
    let mut p = predictor();
    let res = p.tap(-500.0, -500.0);
    assert_eq!(res.best_completion, "");
    assert!(res.suggestions.is_empty());
    assert!(p.hypotheses().is_empty());
    assert_eq!(p.taps().len(), 1);

    // The next tap starts the word over.
    let (x, y) = center(&p, 'a');
    let res = p.tap(x, y);
    assert_eq!(res.best_completion.chars().count(), 1);
}

// --- BACKSPACE ---

#[test]
fn test_backspace_equals_first_four_taps() {
    let mut four = predictor();
    let expected = type_word(&mut four, "hell");

    let mut p = predictor();
    type_word(&mut p, "hello");
    let res = p.backspace().unwrap();

    assert_eq!(p.taps().len(), 4);
    assert_eq!(snapshot(p.hypotheses()), snapshot(four.hypotheses()));
    assert_eq!(res, expected);
    assert_eq!(p.session().backspaces, 1);
}

#[test]
fn test_backspace_is_inverse_of_raw_tap() {
    let mut p = predictor();
    for (x, y) in [(100.0, 150.0), (210.0, 190.0), (60.0, 250.0)] {
        p.tap(x, y);
    }
    let before = snapshot(p.hypotheses());
    let before_result = p.last_result().clone();
    let before_taps = p.taps().to_vec();

    p.tap(250.0, 145.0);
    p.backspace().unwrap();

    assert_eq!(snapshot(p.hypotheses()), before);
    assert_eq!(p.last_result(), &before_result);
    assert_eq!(p.taps(), before_taps.as_slice());
}

#[test]
fn test_backspace_last_letter_clears_word() {
    let mut p = predictor();
    type_word(&mut p, "hello");
    p.space();
    type_word(&mut p, "h");

    let res = p.backspace().unwrap();
    assert_eq!(res.full_display_text, "hello ");
    assert_eq!(res.best_completion, "");
    assert!(res.suggestions.is_empty());
    assert!(p.hypotheses().is_empty());
    assert_eq!(p.state(), PredictorState::Idle);
}

#[test]
fn test_backspace_last_letter_at_sentence_start() {
    let mut p = predictor();
    type_word(&mut p, "h");
    let res = p.backspace().unwrap();
    assert_eq!(res.full_display_text, "");
}

#[test]
fn test_backspace_reopens_committed_word() {
    let mut p = predictor();
    type_word(&mut p, "hello");
    let typed = snapshot(p.hypotheses());
    p.space();
    assert_eq!(p.committed_words(), &["hello".to_string()]);

    let res = p.backspace().unwrap();
    assert!(p.committed_words().is_empty());
    assert_eq!(p.history(), " ");
    assert_eq!(p.taps().len(), 5);
    assert_eq!(res.best_completion, "hello");
    // Typed at key centers in the first place, so the replay is exact.
    assert_eq!(snapshot(p.hypotheses()), typed);
}

#[test]
fn test_reopening_unsupported_word_restores_session() {
    let mut p = predictor();
    type_word(&mut p, "hello");
    p.suggestion_picked("ok!");
    let before = p.session().clone();

    let err = p.backspace().unwrap_err();
    assert!(matches!(err, TapwiseError::UnsupportedSymbol('!')));
    assert_eq!(p.session(), &before);
    assert_eq!(p.committed_words(), &["ok!".to_string()]);
}

#[test]
fn test_backspace_with_nothing_is_noop() {
    let mut p = predictor();
    let res = p.backspace().unwrap();
    assert_eq!(res, PredictionResult::default());
    assert_eq!(p.session().backspaces, 0);
    assert_eq!(p.state(), PredictorState::Idle);
}

// --- SPACE / PICK ---

#[test]
fn test_space_then_next_word_uses_history() {
    let mut p = predictor();
    type_word(&mut p, "hello");
    let res = p.space();
    assert_eq!(res.full_display_text, "hello ");
    assert!(res.suggestions.is_empty());
    assert_eq!(p.history(), "hello ");
    assert!(p.hypotheses().is_empty());
    assert!(p.taps().is_empty());

    let res = type_word(&mut p, "how");
    assert_eq!(p.history(), "hello ");
    assert!(p.hypotheses().texts().contains(&"how"));
    assert!(res.full_display_text.starts_with("hello "));

    // Same taps without the committed word weigh the hypotheses differently.
    let mut fresh = predictor();
    type_word(&mut fresh, "how");
    let weight_of = |h: &tapwise::predictor::HypothesisSet| {
        h.iter().find(|w| w.text() == "how").map(|w| w.weight())
    };
    assert_ne!(weight_of(p.hypotheses()), weight_of(fresh.hypotheses()));
}

#[test]
fn test_repeated_space_commits_nothing() {
    let mut p = predictor();
    type_word(&mut p, "hello");
    p.space();
    let res = p.space();
    assert_eq!(p.committed_words(), &["hello".to_string()]);
    assert_eq!(res.full_display_text, "hello ");

    let mut empty = predictor();
    assert_eq!(empty.space().full_display_text, "");
    assert!(empty.committed_words().is_empty());
}

#[test]
fn test_suggestion_pick_commits_text() {
    let f = fixture();
    let mut p = f.predictor;
    type_word(&mut p, "hel");
    let res = p.suggestion_picked("help");
    assert_eq!(res.full_display_text, "help ");
    assert_eq!(p.committed_words(), &["help".to_string()]);
    assert_eq!(p.session().suggestions_picked, 1);
    assert_eq!(p.state(), PredictorState::Idle);
}

// --- FINISH SENTENCE ---

#[test]
fn test_finish_without_taps_is_invalid() {
    let mut p = predictor();
    let stats = p.finish_sentence();
    assert!(!stats.valid);
    assert_eq!(stats.elapsed_ms, 0);
    assert_eq!(stats.final_phrase, "");
}

#[test]
fn test_finish_records_time_and_counts() {
    let f = fixture();
    let (clock, mut p) = (f.clock, f.predictor);

    for c in "hello".chars() {
        let (x, y) = center(&p, c);
        p.tap(x, y);
        clock.advance(250);
    }
    p.space();
    type_word(&mut p, "x");
    clock.advance(250);
    p.backspace().unwrap();

    let stats = p.finish_sentence();
    assert!(stats.valid);
    assert_eq!(stats.final_phrase, "hello");
    assert_eq!(stats.elapsed_ms, 1500);
    assert_eq!(stats.backspace_count, 1);
    assert_eq!(stats.suggestion_pick_count, 0);

    // Everything resets for the next sentence.
    assert_eq!(p.history(), " ");
    assert!(p.committed_words().is_empty());
    assert_eq!(p.session().backspaces, 0);
    assert_eq!(p.session().first_tap_ms, None);
}

#[test]
fn test_finish_includes_word_in_progress() {
    let f = fixture();
    let (clock, mut p) = (f.clock, f.predictor);
    type_word(&mut p, "hello");
    p.space();
    clock.advance(1000);
    type_word(&mut p, "how");
    let best = p.last_result().best_completion.clone();

    let stats = p.finish_sentence();
    assert_eq!(stats.final_phrase, format!("hello {}", best));
    assert_eq!(stats.elapsed_ms, 1000);
}

#[test]
fn test_single_instant_tap_is_invalid() {
    let mut p = predictor();
    type_word(&mut p, "a");
    assert!(!p.finish_sentence().valid);
}

// --- MODEL & LAYOUT ---

#[test]
fn test_learning_does_not_touch_shared_model() {
    let shared = shared_model();
    let before = shared.symbols_learned();

    let mut p = predictor();
    p.learn("zyzzyva zyzzyva");
    assert!(!Arc::ptr_eq(p.model(), &shared));
    assert!(p.model().symbols_learned() > before);
    assert_eq!(shared_model().symbols_learned(), before);
}

#[test]
fn test_configure_layout() {
    let mut p = predictor();
    let old = p.layout().clone();

    let bad = LayoutParams {
        width: 0.0,
        ..Default::default()
    };
    assert!(!p.configure_layout(&bad));
    assert_eq!(p.layout(), &old);

    let nan_margin = LayoutParams {
        top_margin: f64::NAN,
        ..Default::default()
    };
    assert!(!p.configure_layout(&nan_margin));
    let inf_stretch = LayoutParams {
        row_stretch: "1.0,inf,1.0".into(),
        ..Default::default()
    };
    assert!(!p.configure_layout(&inf_stretch));
    assert_eq!(p.layout(), &old);

    let h = p.layout().key_center('h').unwrap();
    let v = p.layout().likelihoods_for_tap(h.x, h.y);
    assert!(v.iter().all(|x| x.is_finite()));

    let wide = LayoutParams {
        width: 480.0,
        ..Default::default()
    };
    assert!(p.configure_layout(&wide));
    assert_eq!(p.layout().width(), 480.0);
}

#[test]
fn test_builder_rejects_bad_params() {
    let res = PredictorBuildParams::builder()
        .model(shared_model())
        .predictor(PredictorParams {
            beam_width: 2,
            suggestion_count: 3,
            ..Default::default()
        })
        .build()
        .build_predictor();
    assert!(matches!(res, Err(TapwiseError::Config(_))));
}

#[test]
fn test_narrow_beam() {
    let mut p = PredictorBuildParams::builder()
        .model(shared_model())
        .predictor(PredictorParams {
            beam_width: 2,
            suggestion_count: 1,
            ..Default::default()
        })
        .build()
        .build_predictor()
        .unwrap();
    let res = type_word(&mut p, "the");
    assert!(p.hypotheses().len() <= 2);
    assert!(res.suggestions.len() <= 1);
}

#[test]
fn test_unseeded_predictor_still_predicts() {
    let mut p = PredictorBuildParams::builder()
        .seed_corpus(false)
        .build()
        .build_predictor()
        .unwrap();
    assert_eq!(p.model().symbols_learned(), 0.0);
    let res = type_word(&mut p, "q");
    assert_eq!(res.best_completion, "q");
}
