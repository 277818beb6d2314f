//! tidekv CLI
//!
//! Command-line driver for a tidekv data directory. An external collaborator
//! of the engine: it only calls `startup`, `upsert`, `delete`, `get`, and
//! `shutdown`.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use tidekv::{Config, Engine};

/// tidekv CLI
#[derive(Parser, Debug)]
#[command(name = "tidekv-cli")]
#[command(about = "CLI for the tidekv key-value engine")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./tidekv_data")]
    data_dir: String,

    /// Memtable flush threshold (distinct keys)
    #[arg(long, default_value = "5")]
    memtable_obj_limit: usize,

    /// WAL segment merge threshold (entries)
    #[arg(long, default_value = "5")]
    wal_obj_limit: usize,

    /// Journal retention window (records)
    #[arg(long, default_value = "5")]
    journal_line_limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tidekv=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .memtable_obj_limit(args.memtable_obj_limit)
        .wal_obj_limit(args.wal_obj_limit)
        .journal_line_limit(args.journal_line_limit)
        .build();

    if let Err(e) = run(config, args.command) {
        tracing::error!("command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config, command: Commands) -> tidekv::Result<()> {
    let mut engine = Engine::open(config)?;
    engine.startup()?;

    match &command {
        Commands::Get { key } => match engine.get(key)? {
            Some(value) => println!("{}", value),
            None => println!("(not found)"),
        },
        Commands::Set { key, value } => {
            engine.upsert(key, value)?;
            println!("OK");
        }
        Commands::Del { key } => {
            engine.delete(key)?;
            println!("OK");
        }
    }

    engine.shutdown()
}
