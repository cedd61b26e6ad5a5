//! Main entry point for the Stockroom application
//! Resolves configuration, opens the product database and starts the egui window.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eframe::egui;

use stockroom::infra::app_config;
use stockroom::infra::db::Database;
use stockroom::ui::app::InventoryApp;

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version)]
#[command(about = "Desktop inventory manager backed by a local SQLite file", long_about = None)]
struct Args {
    /// Product database file (overrides STOCKROOM_DB_PATH and the config file)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = app_config::load_config();
    let db = Database::open_at(Database::resolve_path(args.db, &config))?;
    log::info!("Using product database at {}", db.path().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Stockroom"),
        ..Default::default()
    };

    let products = db.product_repo();
    eframe::run_native(
        "Stockroom",
        options,
        Box::new(move |cc| Ok(Box::new(InventoryApp::new_egui(cc, products)))),
    )
    .map_err(|err| anyhow::anyhow!("window closed with an error: {err}"))
}
