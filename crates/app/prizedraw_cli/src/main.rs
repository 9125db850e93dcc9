// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands};
use prizedraw_core::auth::store::{FileTokenStore, TokenStore};
use prizedraw_core::config::AppConfig;
use prizedraw_core::controller::{AppController, Screen};

mod cli;
mod logging;
mod render;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Cli::parse();

    match args.command {
        Commands::Status { init_data } => {
            run_flow(init_data.unwrap_or_default(), false).await?;
        }
        Commands::Join { init_data } => {
            run_flow(init_data.unwrap_or_default(), true).await?;
        }
        Commands::Logout => {
            let config = AppConfig::from_env();
            let store = FileTokenStore::new(config.data_dir);
            store.clear();
            println!("Stored tokens cleared.");
        }
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Run the webapp startup flow, optionally attempt a join, and render the
/// resulting screen to stdout.
async fn run_flow(init_data: String, join: bool) -> Result<()> {
    let config = AppConfig::from_env();
    let store = Arc::new(FileTokenStore::new(config.data_dir.clone()));
    let mut controller = AppController::new(&config, store, init_data);

    controller.initialize().await;
    if join {
        controller.join().await;
    }

    println!("{}", render::screen(controller.screen(), controller.can_join()));

    // A failed startup maps to a non-zero exit for scripting
    if let Screen::LoadFailed { reason } = controller.screen() {
        return Err(Error::Startup(reason.clone()));
    }
    Ok(())
}
