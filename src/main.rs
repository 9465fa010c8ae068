use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;

use recipe_catalog::config::Config;
use recipe_catalog::console::Console;
use recipe_catalog::logging::init_tracing;
use recipe_catalog::shutdown::ShutdownCoordinator;
use recipe_catalog::store::StoreLayer;
use recipe_catalog::ui::catalog::CatalogState;
use recipe_catalog::ui::runtime::Runtime;

/// Browse and edit three views of one shared recipe collection.
#[derive(Parser, Debug)]
#[command(name = "recipe-catalog", version)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed recipe names, replacing the configured seed
    #[arg(long, value_name = "NAME", num_args = 1..)]
    seed: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if !cli.seed.is_empty() {
        config.seed.recipes = cli.seed;
        config.validate()?;
    }
    tracing::info!(seed = config.seed.recipes.len(), "Starting recipe catalog");

    let coordinator = ShutdownCoordinator::new();
    let (store, store_task) =
        StoreLayer::spawn(config.seed.collection(), config.store.command_buffer);
    let (handle, runtime) = Runtime::new(
        CatalogState::new(config.lists.labels()),
        store.clone(),
        config.runtime.intent_buffer,
        coordinator.handle(),
    );
    let runtime_task = tokio::spawn(runtime.run());

    let settle = Duration::from_millis(config.runtime.settle_timeout_ms);
    let mut console = Console::new(handle, store, tokio::io::stdout(), settle);
    let session = tokio::select! {
        result = console.run(BufReader::new(tokio::io::stdin())) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted");
            Ok(())
        }
    };

    coordinator.signal();
    let state = runtime_task.await.context("catalog runtime panicked")?;
    tracing::debug!(focused = ?state.destination_tag, "Runtime stopped");

    // The store stops once the last client is gone, after pending saves and
    // deletes have been applied.
    drop(console);
    store_task.await.context("store task panicked")?;
    tracing::debug!("Store stopped");

    session?;
    Ok(())
}
