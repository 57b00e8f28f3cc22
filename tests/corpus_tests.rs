use std::io::Write;
use tapwise::corpus::{learn_corpus, load_corpus_file, load_phrases, CorpusEntry};
use tapwise::model::LanguageModel;

#[test]
fn test_corpus_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "good morning\t3").unwrap();
    writeln!(file, "don't stop").unwrap();
    writeln!(file, "broken\tmany").unwrap();

    let entries = load_corpus_file(file.path()).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].count, 3);
    assert_eq!(entries[1].phrase, "don't stop");
    assert_eq!(entries[1].count, 1);
}

#[test]
fn test_missing_corpus_file() {
    assert!(load_corpus_file("/no/such/corpus.tsv").is_err());
}

#[test]
fn test_counts_repeat_learning() {
    let once = vec![CorpusEntry {
        phrase: "ab".into(),
        count: 1,
    }];
    let thrice = vec![CorpusEntry {
        phrase: "ab".into(),
        count: 3,
    }];

    let mut a = LanguageModel::new();
    assert_eq!(learn_corpus(&mut a, &once), 1);
    let mut b = LanguageModel::new();
    assert_eq!(learn_corpus(&mut b, &thrice), 3);

    assert_eq!(b.symbols_learned(), 3.0 * a.symbols_learned());
    assert_eq!(
        b.ngrams().frequencies(" a")[b'b' as usize],
        3.0 * a.ngrams().frequencies(" a")[b'b' as usize]
    );
}

#[test]
fn test_phrases_skip_blank_lines() {
    let phrases = load_phrases("one\n\n  two  \n\n".as_bytes()).unwrap();
    assert_eq!(phrases, vec!["one", "two"]);
}
