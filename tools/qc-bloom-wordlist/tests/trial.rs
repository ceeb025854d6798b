//! Word list trial tests against real files

use std::io::Write;

use qc_bloom::{BloomFilter, FilterConfig};
use qc_bloom_wordlist::{
    load_config, load_words, resolve_config, run_trial, split_words, HasherChoice, TrialError,
};
use tempfile::NamedTempFile;

fn word_file(count: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    for i in 0..count {
        writeln!(file, "word{:06}", i).expect("write word");
    }
    file.flush().expect("flush");
    file
}

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write json");
    file.flush().expect("flush");
    file
}

#[test]
fn test_trial_has_no_missing_words() {
    let file = word_file(4_000);
    let words = load_words(file.path(), 4_000).unwrap();
    let (inserted, probes) = split_words(&words, 2_000).unwrap();

    let mut filter = BloomFilter::new(2_000, 4, 0.05).unwrap();
    let report = run_trial(&mut filter, inserted, probes);

    assert_eq!(report.inserted, 2_000);
    assert_eq!(report.probed, 2_000);
    assert_eq!(report.missing, 0, "No inserted word may be missing");
    assert!(
        report.actual_fpr() < report.estimated_fpr * 3.0,
        "Observed {} far above estimate {}",
        report.actual_fpr(),
        report.estimated_fpr
    );
    assert_eq!(report.size_bits, filter.size());
    assert_eq!(report.bits_set, filter.bits_set_count());
}

#[test]
fn test_trial_with_siphash_family() {
    let file = word_file(1_000);
    let words = load_words(file.path(), 1_000).unwrap();
    let (inserted, probes) = split_words(&words, 500).unwrap();

    let config = resolve_config(FilterConfig::default(), Some(500), Some(3), Some(0.02)).unwrap();
    let mut filter =
        BloomFilter::from_config_with_hasher(config, HasherChoice::Siphash.family(17)).unwrap();
    let report = run_trial(&mut filter, inserted, probes);

    assert_eq!(report.missing, 0);
    assert!(report.false_positives < report.probed);
}

#[test]
fn test_short_word_list_is_rejected() {
    let file = word_file(10);
    let words = load_words(file.path(), 200).unwrap();

    assert_eq!(words.len(), 10);
    assert!(matches!(
        split_words(&words, 100),
        Err(TrialError::NotEnoughWords { needed: 100, found: 10 })
    ));
}

#[test]
fn test_missing_word_list_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_words(&dir.path().join("absent.txt"), 10);
    assert!(matches!(result, Err(TrialError::Io(_))));
}

#[test]
fn test_load_config_file() {
    let file = json_file(r#"{ "num_keys": 1000, "num_hashes": 5, "max_false_positive": 0.02 }"#);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.num_keys(), 1000);
    assert_eq!(config.num_hashes(), 5);

    let overridden = resolve_config(config, None, Some(2), None).unwrap();
    assert_eq!(overridden.num_keys(), 1000);
    assert_eq!(overridden.num_hashes(), 2);
}

#[test]
fn test_load_config_rejects_invalid_values() {
    let file = json_file(r#"{ "num_keys": 0, "num_hashes": 5, "max_false_positive": 0.02 }"#);
    assert!(matches!(load_config(file.path()), Err(TrialError::Filter(_))));

    let file = json_file("not json");
    assert!(matches!(load_config(file.path()), Err(TrialError::ConfigFile(_))));
}
