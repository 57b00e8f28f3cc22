mod common;

use tapwise::config::{LayoutParams, PredictorParams};
use tapwise::error::TapwiseError;
use tapwise::verifier::PhraseVerifier;

fn verifier() -> PhraseVerifier {
    PhraseVerifier::new(
        LayoutParams::default(),
        PredictorParams::default(),
        common::shared_model(),
    )
}

#[test]
fn test_single_word_is_typed_exactly() {
    let outcome = verifier().verify_phrase("hello").unwrap();
    assert!(outcome.exact, "typed {:?}", outcome.typed);
    assert_eq!(outcome.edit_distance, 0);
    let stats = outcome.stats.unwrap();
    assert!(stats.valid);
    assert_eq!(stats.elapsed_ms, 1200);
}

#[test]
fn test_untypeable_phrase_is_an_error() {
    let res = verifier().verify_phrase("call me at 5");
    assert!(matches!(res, Err(TapwiseError::UnsupportedSymbol('5'))));
}

#[test]
fn test_batch_counts_every_phrase() {
    let phrases: Vec<String> = ["hello", "see you on the third", "room 101"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let report = verifier().verify_all(&phrases);

    assert_eq!(report.total(), 3);
    assert_eq!(report.outcomes[0].target, "hello");
    assert_eq!(report.outcomes[2].target, "room 101");
    assert!(report.outcomes[2].error.is_some());
    assert!(!report.outcomes[2].exact);
    assert!(report.correct() >= 1);
    assert!(report.accuracy() > 0.0 && report.accuracy() < 1.0);
}

#[test]
fn test_batch_is_deterministic() {
    let phrases = tapwise::corpus::test_phrases().unwrap();
    let phrases = &phrases[..20];
    let v = verifier();
    let a = v.verify_all(phrases);
    let b = v.verify_all(phrases);
    let typed = |r: &tapwise::verifier::VerificationReport| {
        r.outcomes.iter().map(|o| o.typed.clone()).collect::<Vec<_>>()
    };
    assert_eq!(typed(&a), typed(&b));
    assert_eq!(a.correct(), b.correct());
}
