use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

use crate::config::{DEFAULT_CACHE_PATH, DEFAULT_SOURCE_DIR, DictionaryConfig};
use crate::dictionary::WordDictionary;
use crate::index_storage::cache_modified_utc;
use crate::logging::init_logging;
use crate::models::{CacheAction, InitSummary, ScanReport};
use crate::utils::format_count;

/// Word looked up when `check` is given no words
const DEMO_WORD: &str = "ABANDONING";

#[derive(Parser)]
#[command(name = "word-dictionary")]
#[command(version = "0.1.0")]
#[command(about = "Build, cache and query a word list from a folder of text files", long_about = None)]
pub struct Cli {
    /// Directory scanned for .txt source files
    #[arg(long, global = true, env = "WORD_DICTIONARY_SOURCE_DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Location of the cached dictionary
    #[arg(long, global = true, env = "WORD_DICTIONARY_CACHE_FILE", default_value = DEFAULT_CACHE_PATH)]
    pub cache_file: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether words are in the dictionary
    Check {
        /// Words to look up
        words: Vec<String>,
    },
    /// Show statistics about the dictionary and its cache
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete the cache and rebuild it from the source files
    Rebuild,
}

#[derive(Debug, Serialize)]
struct DictionaryStats {
    word_count: usize,
    word_count_display: String,
    source_dir: PathBuf,
    cache_path: PathBuf,
    cache_modified: Option<DateTime<Utc>>,
    action: CacheAction,
    scan: Option<ScanStats>,
    failures: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ScanStats {
    files_scanned: usize,
    files_skipped: usize,
    tokens_seen: usize,
    tokens_accepted: usize,
    unique_words: usize,
}

impl From<&ScanReport> for ScanStats {
    fn from(report: &ScanReport) -> Self {
        Self {
            files_scanned: report.files_scanned,
            files_skipped: report.files_skipped,
            tokens_seen: report.tokens_seen,
            tokens_accepted: report.tokens_accepted,
            unique_words: report.unique_words,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = DictionaryConfig::new(&cli.source_dir, &cli.cache_file);

    match &cli.command {
        Some(Commands::Check { words }) => check_words(config, words)?,
        Some(Commands::Stats { json }) => show_stats(config, *json)?,
        Some(Commands::Rebuild) => rebuild(config)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Human-readable verdict for a single lookup
pub fn describe_lookup(dictionary: &WordDictionary, word: &str) -> String {
    if dictionary.query(word) {
        format!("{} is a valid word! :D", word)
    } else {
        format!("{} is invalid D:", word)
    }
}

fn initialize(config: DictionaryConfig) -> (WordDictionary, InitSummary) {
    let mut dictionary = WordDictionary::new(config);
    let summary = dictionary.initialize();
    if !summary.is_clean() {
        eprintln!("Warning: {} problem(s) while initializing the dictionary", summary.failures.len());
    }
    (dictionary, summary)
}

fn check_words(config: DictionaryConfig, words: &[String]) -> Result<()> {
    let (dictionary, _) = initialize(config);

    if words.is_empty() {
        println!("{}", describe_lookup(&dictionary, DEMO_WORD));
    } else {
        for word in words {
            println!("{}", describe_lookup(&dictionary, word));
        }
    }

    Ok(())
}

fn show_stats(config: DictionaryConfig, json: bool) -> Result<()> {
    let (dictionary, summary) = initialize(config);

    let stats = DictionaryStats {
        word_count: dictionary.len(),
        word_count_display: format_count(dictionary.len() as u64),
        source_dir: dictionary.source_dir().to_path_buf(),
        cache_path: dictionary.cache_path().to_path_buf(),
        cache_modified: cache_modified_utc(dictionary.cache_path()),
        action: summary.action,
        scan: summary.scan.as_ref().map(ScanStats::from),
        failures: summary.failures.iter().map(ToString::to_string).collect(),
    };

    if json {
        let output =
            serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
        println!("{}", output);
        return Ok(());
    }

    println!("Word Dictionary Statistics");
    println!("==========================");
    println!("Valid words: {} ({})", stats.word_count_display, stats.word_count);
    println!("Source directory: {}", stats.source_dir.display());
    println!("Cache file: {}", stats.cache_path.display());
    if let Some(modified) = stats.cache_modified {
        println!("Cache last modified: {}", modified.format("%Y-%m-%d %H:%M:%S"));
    }
    println!("Cache status: {}", action_label(stats.action));
    if let Some(scan) = &stats.scan {
        println!(
            "Scanned: {} files ({} skipped), {}/{} words accepted",
            scan.files_scanned, scan.files_skipped, scan.tokens_accepted, scan.tokens_seen
        );
    }
    for failure in &stats.failures {
        println!("  Problem: {}", failure);
    }

    Ok(())
}

fn rebuild(config: DictionaryConfig) -> Result<()> {
    if config.cache_path.exists() {
        fs::remove_file(&config.cache_path).with_context(|| {
            format!("Failed to delete cache file: {}", config.cache_path.display())
        })?;
    }

    let (dictionary, _) = initialize(config);
    println!(
        "Rebuilt {} with {} words",
        dictionary.cache_path().display(),
        format_count(dictionary.len() as u64)
    );

    Ok(())
}

fn action_label(action: CacheAction) -> &'static str {
    match action {
        CacheAction::Built => "built from source files",
        CacheAction::Rebuilt => "rebuilt (sources were newer)",
        CacheAction::Loaded => "up to date",
    }
}
