use clap::Parser;
use shelf::core::config::{self, EnvOverrides};
use shelf::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "shelf", about = "Browse the featured books catalog")]
struct Args {
    /// Catalog server base URL (overrides SHELF_BASE_URL and the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Catalog page to load
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    page: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to shelf.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("shelf.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        config::ShelfConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &EnvOverrides::from_env(),
        args.base_url.as_deref(),
        args.page,
    );

    log::info!(
        "Shelf starting up: base_url={}, page={}",
        resolved.base_url,
        resolved.page
    );

    tui::run(resolved)
}
