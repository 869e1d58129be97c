//! Snarkbot - a sarcastic chat companion
//!
//! Interactive console front end for the snarkbot response engine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use snarkbot::{EngineConfig, SnarkEngine, WordList};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Seed the response RNG (for reproducible sessions)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to the common-word list
    #[arg(short, long)]
    wordlist: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🤖 Snarkbot v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = EngineConfig::load().unwrap_or_default();
    if args.wordlist.is_some() {
        config.wordlist_path = args.wordlist;
    }

    let words = WordList::find_default(config.wordlist_path.as_deref())
        .context("cannot start without a common-word list")?;

    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut engine = SnarkEngine::with_rng(config, words, rng);

    println!("{}", engine.opening_prompt());
    println!("(Type 'quit' to leave. Like you have anywhere better to be.)");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if matches!(line.trim(), "quit" | "exit") {
            println!("Finally. Don't let the door hit you.");
            break;
        }

        println!("{}", engine.get_response(line));
    }

    Ok(())
}
