use anyhow::Result;
use log::{error, info};
use simple_logger::SimpleLogger;

use thegoal::config::{AppConfig, CONFIG_FILE};

fn main() -> Result<()> {
    let config = AppConfig::load(CONFIG_FILE)?;
    SimpleLogger::new()
        .with_level(config.logging.level_filter())
        .init()?;
    info!("Starting {} ({}x{})", config.window.title, config.window.width, config.window.height);

    if let Err(e) = thegoal::run(config) {
        error!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}
