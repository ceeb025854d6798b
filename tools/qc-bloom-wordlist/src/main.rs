//! QC-Bloom-Wordlist: insert a word list into a Bloom filter and measure it
//!
//! Prints, in order: the estimated false positive rate (percent), the number
//! of inserted words not found, the number of never-inserted words found,
//! and the observed false positive rate (percent).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use qc_bloom::{BloomFilter, FilterConfig};
use qc_bloom_wordlist::{
    load_config, load_words, resolve_config, run_trial, split_words, HasherChoice,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// QC-Bloom-Wordlist: empirical Bloom filter trial
#[derive(Parser, Debug)]
#[command(name = "qc-bloom-wordlist")]
#[command(about = "Insert words into a Bloom filter and measure false positives")]
struct Args {
    /// Word list, one key per line
    #[arg(short, long, default_value = "wordlist.txt")]
    words: PathBuf,

    /// JSON filter configuration (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of keys to insert (n)
    #[arg(short = 'n', long)]
    keys: Option<usize>,

    /// Hash functions per key (d)
    #[arg(short = 'd', long)]
    hashes: Option<u32>,

    /// Target false positive rate (p)
    #[arg(short = 'p', long)]
    fpr: Option<f64>,

    /// Hash family
    #[arg(long, value_enum, default_value_t = HasherChoice::Murmur)]
    hasher: HasherChoice,

    /// Salt for the hash family
    #[arg(long, default_value = "0")]
    tweak: u32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let base = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading filter config {}", path.display()))?,
        None => FilterConfig::default(),
    };
    let config = resolve_config(base, args.keys, args.hashes, args.fpr)?;
    let num_keys = config.num_keys();

    let words = load_words(&args.words, num_keys.saturating_mul(2))
        .with_context(|| format!("reading word list {}", args.words.display()))?;
    let (inserted, probes) = split_words(&words, num_keys)?;

    let mut filter = BloomFilter::from_config_with_hasher(config, args.hasher.family(args.tweak))?;
    info!(
        num_keys,
        num_hashes = filter.hash_count(),
        size_bits = filter.size(),
        hasher = ?args.hasher,
        "Filter ready"
    );

    let report = run_trial(&mut filter, inserted, probes);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.estimated_fpr * 100.0);
        println!("{}", report.missing);
        println!("{}", report.false_positives);
        println!("{}", report.actual_fpr() * 100.0);
    }

    info!(
        occupancy_fpr = filter.occupancy_false_positive_rate(),
        fill_ratio = filter.fill_ratio(),
        "Measured occupancy"
    );

    Ok(())
}
