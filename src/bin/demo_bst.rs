//! Shows how much the shape of a BST matters for searching.
//!
//! Runs four timed workloads over a word list: scanning a plain list, searching a BST built from
//! the words in file (sorted) order, searching a BST built from randomly drawn words, and the same
//! random BST after rebalancing.

use std::fs;
use std::hint;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use linked_bst::OrderedTree;

#[derive(Parser, Debug)]
#[command(version, about = "Time word searches in a list and in differently shaped BSTs")]
struct Cli {
    /// Word list with one word per line. Random words are generated when omitted.
    #[arg(short, long, env = "DEMO_BST_WORDS")]
    words: Option<PathBuf>,

    /// How many words the plain list scan looks through
    #[arg(long, default_value_t = 65_000)]
    list_prefix: usize,

    /// How many words (in file order) go into the sorted BST
    #[arg(long, default_value_t = 1_100)]
    sorted_prefix: usize,

    /// How many randomly drawn words go into the random BSTs
    #[arg(long, default_value_t = 60_000)]
    random_words: usize,

    /// How many words to search for in each workload
    #[arg(short, long, default_value_t = 10_000)]
    queries: usize,

    /// Words to generate when no word list is given
    #[arg(long, default_value_t = 100_000)]
    generate: usize,

    /// Seed for every random choice
    #[arg(long, env = "DEMO_BST_SEED", default_value_t = 42)]
    seed: u64,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

#[derive(Error, Debug)]
enum DemoError {
    #[error("failed to read word list {}: {source}", .path.display())]
    ReadWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {} has no words", .0.display())]
    NoWords(PathBuf),
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let words = match &cli.words {
        Some(path) => read_words(path)?,
        None => generate_words(&mut rng, cli.generate),
    };
    info!(words = words.len(), "loaded word list");

    let elapsed = time(|| {
        let list = &words[..cli.list_prefix.min(words.len())];
        draw(&mut rng, &words, cli.queries)
            .filter(|w| list.contains(w))
            .count()
    });
    println!("Searching {} words in a list: {elapsed:?}", cli.queries);

    let elapsed = time(|| {
        let tree: OrderedTree<&String> = words.iter().take(cli.sorted_prefix).collect();
        debug!(height = ?tree.height(), "built sorted BST");
        search(&tree, draw(&mut rng, &words, cli.queries))
    });
    println!("Searching {} words in a sorted BST: {elapsed:?}", cli.queries);

    let elapsed = time(|| {
        let tree: OrderedTree<&String> = draw(&mut rng, &words, cli.random_words).collect();
        debug!(height = ?tree.height(), "built random BST");
        search(&tree, draw(&mut rng, &words, cli.queries))
    });
    println!(
        "Searching {} words in a BST from random words: {elapsed:?}",
        cli.queries
    );

    let elapsed = time(|| {
        let mut tree: OrderedTree<&String> = draw(&mut rng, &words, cli.random_words).collect();
        tree.rebalance();
        println!("Rebalanced BST is balanced: {}", tree.is_balanced());
        search(&tree, draw(&mut rng, &words, cli.queries))
    });
    println!(
        "Searching {} words in a balanced BST: {elapsed:?}",
        cli.queries
    );

    Ok(())
}

fn read_words(path: &Path) -> Result<Vec<String>, DemoError> {
    let contents = fs::read_to_string(path).map_err(|source| DemoError::ReadWords {
        path: path.to_path_buf(),
        source,
    })?;
    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect();
    if words.is_empty() {
        return Err(DemoError::NoWords(path.to_path_buf()));
    }
    Ok(words)
}

/// Random lowercase words, sorted the way a dictionary file would be.
fn generate_words(rng: &mut StdRng, count: usize) -> Vec<String> {
    let mut words: Vec<String> = (0..count.max(1))
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect();
    words.sort();
    words
}

/// Draws `count` words with replacement.
fn draw<'w, 'r>(
    rng: &'r mut StdRng,
    words: &'w [String],
    count: usize,
) -> impl Iterator<Item = &'w String> + 'r
where
    'w: 'r,
{
    (0..count).filter_map(move |_| words.choose(rng))
}

/// How many of `queries` the tree contains.
fn search<'a>(tree: &OrderedTree<&'a String>, queries: impl Iterator<Item = &'a String>) -> usize {
    queries.filter(|q| tree.find(q).is_some()).count()
}

fn time<R>(f: impl FnOnce() -> R) -> Duration {
    let instant = Instant::now();
    hint::black_box(f());
    let elapsed = instant.elapsed();
    debug!(?elapsed, "workload finished");
    elapsed
}
