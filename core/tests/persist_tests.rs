use std::fs;

use docfind_core::persist::{load_idf, load_tf, save_idf, save_tf};
use docfind_core::{Corpus, Error, SearchEngine};

fn sample_corpus() -> Corpus {
    Corpus::from_texts([
        ("NYT_0001".to_string(), "Hurricane hits the coast"),
        ("NYT_0002".to_string(), "The council debates the budget"),
        ("NYT_0003".to_string(), "Coast towns rebuild after the storm"),
    ])
}

#[test]
fn round_trip_reproduces_the_tables() {
    let engine = SearchEngine::build(&sample_corpus()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let tf_path = dir.path().join("sample.tf");
    let idf_path = dir.path().join("sample.idf");

    save_tf(&tf_path, engine.tf()).unwrap();
    save_idf(&idf_path, engine.idf()).unwrap();

    assert_eq!(&load_tf(&tf_path).unwrap(), engine.tf());
    assert_eq!(&load_idf(&idf_path).unwrap(), engine.idf());
}

#[test]
fn round_trip_reproduces_query_scores() {
    let engine = SearchEngine::build(&sample_corpus()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let tf_path = dir.path().join("sample.tf");
    let idf_path = dir.path().join("sample.idf");

    save_tf(&tf_path, engine.tf()).unwrap();
    save_idf(&idf_path, engine.idf()).unwrap();
    let loaded =
        SearchEngine::from_parts(load_tf(&tf_path).unwrap(), load_idf(&idf_path).unwrap());

    let query = vec!["coast".to_string(), "storm".to_string()];
    assert_eq!(engine.execute_query(&query), loaded.execute_query(&query));
}

#[test]
fn rebuilding_the_same_corpus_writes_byte_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.tf");
    let second = dir.path().join("second.tf");

    save_tf(&first, SearchEngine::build(&sample_corpus()).unwrap().tf()).unwrap();
    save_tf(&second, SearchEngine::build(&sample_corpus()).unwrap().tf()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn tf_record_format_is_tab_separated_triples() {
    let engine = SearchEngine::build(&sample_corpus()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let tf_path = dir.path().join("sample.tf");
    save_tf(&tf_path, engine.tf()).unwrap();

    let contents = fs::read_to_string(&tf_path).unwrap();
    for line in contents.lines() {
        assert_eq!(line.split('\t').count(), 3);
    }
    assert!(contents.starts_with("NYT_0001\t"));
}

#[test]
fn tf_line_with_wrong_field_count_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.tf");
    fs::write(&path, "NYT_0001\tcat\n").unwrap();

    assert!(matches!(
        load_tf(&path),
        Err(Error::MalformedRecord {
            line: 1,
            expected: 3,
            ..
        })
    ));
}

#[test]
fn idf_line_with_wrong_field_count_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.idf");
    fs::write(&path, "cat\t0.5\nsat\t0.1\textra\n").unwrap();

    assert!(matches!(
        load_idf(&path),
        Err(Error::MalformedRecord {
            line: 2,
            expected: 2,
            ..
        })
    ));
}

#[test]
fn unparsable_weight_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.idf");
    fs::write(&path, "cat\tnot-a-number\n").unwrap();

    match load_idf(&path) {
        Err(Error::InvalidWeight { line, value, .. }) => {
            assert_eq!(line, 1);
            assert_eq!(value, "not-a-number");
        }
        other => panic!("expected InvalidWeight, got {other:?}"),
    }
}

#[test]
fn missing_index_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_tf(dir.path().join("absent.tf")),
        Err(Error::Io(_))
    ));
}
