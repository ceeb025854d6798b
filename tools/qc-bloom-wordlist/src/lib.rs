//! QC-Bloom-Wordlist: empirical check of a Bloom filter against a word list
//!
//! The trial mirrors how the filter is meant to be validated:
//!
//! ```text
//! word list:  [ first n lines ][ next n lines ]
//!                  insert            probe
//!                  re-query -> missing (must be 0)
//!                                    query -> false positives
//! ```
//!
//! Lines are used as keys byte for byte, line terminator included.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use clap::ValueEnum;
use qc_bloom::{
    FilterConfig, FilterConfigBuilder, FilterError, HashFamily, MembershipFilter, Murmur3Family,
    SipHashFamily,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while preparing a trial
#[derive(Debug, Error)]
pub enum TrialError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config file: {0}")]
    ConfigFile(#[from] serde_json::Error),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("Word list has {found} lines, need at least {needed} to insert")]
    NotEnoughWords { needed: usize, found: usize },
}

/// Hash family selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HasherChoice {
    /// MurmurHash3 x64-128, seeded by `index + tweak`
    #[default]
    Murmur,
    /// SipHash-1-3 keyed by the tweak
    Siphash,
}

impl HasherChoice {
    /// Build the hash family, using `tweak` as its salt
    pub fn family(self, tweak: u32) -> Box<dyn HashFamily> {
        match self {
            HasherChoice::Murmur => Box::new(Murmur3Family::with_tweak(tweak)),
            HasherChoice::Siphash => Box::new(SipHashFamily::with_key(tweak as u64)),
        }
    }
}

/// Outcome of one insert/re-query/probe run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialReport {
    /// Keys inserted
    pub inserted: usize,
    /// Inserted keys that `find` did not report (always 0 for a correct filter)
    pub missing: usize,
    /// Never-inserted keys queried
    pub probed: usize,
    /// Probes that `find` reported as present
    pub false_positives: usize,
    /// Analytic projection reported by the filter
    pub estimated_fpr: f64,
    /// Distinct bits set after the insert phase
    pub bits_set: usize,
    /// Size of the bit array
    pub size_bits: usize,
}

impl TrialReport {
    /// Observed false positive rate, 0 when nothing was probed
    pub fn actual_fpr(&self) -> f64 {
        if self.probed == 0 {
            return 0.0;
        }
        self.false_positives as f64 / self.probed as f64
    }
}

/// Read up to `limit` lines from `reader`, keeping line terminators
pub fn read_words<R: BufRead>(mut reader: R, limit: usize) -> io::Result<Vec<Vec<u8>>> {
    let mut words = Vec::new();
    while words.len() < limit {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        words.push(line);
    }
    Ok(words)
}

/// Read up to `limit` lines from the file at `path`
pub fn load_words(path: &Path, limit: usize) -> Result<Vec<Vec<u8>>, TrialError> {
    let reader = BufReader::new(File::open(path)?);
    let words = read_words(reader, limit)?;
    debug!(path = %path.display(), lines = words.len(), "Loaded word list");
    Ok(words)
}

/// Parse a JSON filter configuration file
pub fn load_config(path: &Path) -> Result<FilterConfig, TrialError> {
    let reader = BufReader::new(File::open(path)?);
    let config: FilterConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Apply command-line overrides on top of a base configuration
pub fn resolve_config(
    base: FilterConfig,
    num_keys: Option<usize>,
    num_hashes: Option<u32>,
    max_false_positive: Option<f64>,
) -> Result<FilterConfig, FilterError> {
    FilterConfigBuilder::new()
        .num_keys(num_keys.unwrap_or(base.num_keys()))
        .num_hashes(num_hashes.unwrap_or(base.num_hashes()))
        .max_false_positive(max_false_positive.unwrap_or(base.max_false_positive()))
        .max_size_bits(base.max_size_bits())
        .build()
}

/// Split `words` into the `num_keys` keys to insert and the probes after them
pub fn split_words(
    words: &[Vec<u8>],
    num_keys: usize,
) -> Result<(&[Vec<u8>], &[Vec<u8>]), TrialError> {
    if words.len() < num_keys {
        return Err(TrialError::NotEnoughWords {
            needed: num_keys,
            found: words.len(),
        });
    }
    Ok(words.split_at(num_keys))
}

/// Insert `inserted`, re-query it, then query `probes`
///
/// `probes` must not overlap `inserted`, otherwise hits among them are
/// counted as false positives.
pub fn run_trial<F: MembershipFilter>(
    filter: &mut F,
    inserted: &[Vec<u8>],
    probes: &[Vec<u8>],
) -> TrialReport {
    for key in inserted {
        filter.insert(key);
    }
    info!(
        keys = inserted.len(),
        bits_set = filter.bits_set_count(),
        size_bits = filter.size(),
        "Insert phase complete"
    );

    let missing = inserted.iter().filter(|key| !filter.find(key)).count();
    let false_positives = probes.iter().filter(|key| filter.find(key)).count();
    info!(missing, false_positives, probed = probes.len(), "Query phase complete");

    TrialReport {
        inserted: inserted.len(),
        missing,
        probed: probes.len(),
        false_positives,
        estimated_fpr: filter.estimated_false_positive_rate(),
        bits_set: filter.bits_set_count(),
        size_bits: filter.size(),
    }
}
