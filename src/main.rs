#![forbid(unsafe_code)]

mod constants;
mod counter;
mod feedback;
mod gui;
mod handlers;
mod hotkeys;
mod storage;
mod store;

use clap::Parser;
use std::path::PathBuf;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use storage::Storage;
use store::CounterStore;

#[derive(Parser)]
#[command(name = "minimal-counter", about = "Persistent tally counters for your desktop")]
struct Args {
    /// Directory holding the persisted state (defaults to the user config dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log verbosity: trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let storage = match args.data_dir {
        Some(dir) => Storage::with_root(dir),
        None => Storage::new(),
    };
    let store = CounterStore::load(storage);
    info!(counters = store.counters().len(), "Starting Minimal Counter");

    gui::run_gui(store)?;
    Ok(())
}
