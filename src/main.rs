mod cli;
mod config;
mod model;
mod recommend;
mod storage;
mod transfer;

use std::{io, process};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use storage::Storage;

fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    init_tracing(&config);

    let root = Storage::default_root().unwrap_or_else(|| {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    });

    let storage = match Storage::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config, &storage) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr. `WARDROBE_LOG` wins over the config's `log`, which wins over `warn`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env("WARDROBE_LOG")
        .or_else(|_| EnvFilter::try_new(config.log.as_deref().unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
