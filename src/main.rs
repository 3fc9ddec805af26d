use env_logger::Builder;
use log::{LevelFilter, error, info};
use std::path::Path;

mod config;
mod curves;
mod error;
mod report;
mod speedup;

use config::VizConfig;

/// Optional TOML file overriding the default axis bounds and paths.
const CONFIG_FILE: &str = "viz.toml";

fn main() {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("sir_viz"), LevelFilter::Debug)
        .init();

    info!("Starting up");

    let config = match VizConfig::load_or_default(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            return;
        }
    };
    if let Err(e) = config.ensure_data_dir() {
        error!("{:#}", e);
        return;
    }

    // Each pipeline runs to completion on its own; a failure in one never
    // prevents the others from being attempted.
    if let Err(e) = curves::run(&config) {
        error!("Epidemic curve pipeline aborted: {}", e);
    }
    if let Err(e) = report::run(&config) {
        error!("Static report pipeline aborted: {}", e);
    }
    if let Err(e) = speedup::run(&config) {
        error!("Speedup pipeline aborted: {}", e);
    }
}
