mod app;
mod catalog;
mod config;
mod exporter;
mod feed;
mod model;
mod normalizer;
mod presenter;
mod pricing;
mod utils;

use app::PricingSheet;
use config::{config_path, load_config};
use feed::feed_from_location;
use presenter::listener::listen_for_commands;
use presenter::table::render_table;
use presenter::Session;
use tokio::io::{self, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr, stdout is the table
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = config_path();
    let config = match load_config(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", path, e);
            return;
        }
    };

    let mut sheet = PricingSheet::new(config.currency_symbol.clone());
    match feed_from_location(&config.feed) {
        Ok(source) => sheet.load_from(source.as_ref()).await,
        Err(e) => warn!("Feed source unavailable, catalog stays empty: {}", e),
    }

    let mut session = Session::new(sheet, config);
    let mut stdout = io::stdout();

    let first_render = render_table(&session.sheet.visible_rows());
    if let Err(e) = stdout.write_all(first_render.as_bytes()).await {
        error!("Cannot write to stdout: {}", e);
        return;
    }

    info!("Ready. Type /help for commands.");
    let stdin = BufReader::new(io::stdin());
    if let Err(e) = listen_for_commands(&mut session, stdin, stdout).await {
        error!("Session ended with an I/O error: {}", e);
    }
}
