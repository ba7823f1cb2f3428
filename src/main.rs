use std::io;

use anyhow::Result;
use clap::Parser;

use transit_cli::app::App;
use transit_cli::config::{AppConfig, Cli};
use transit_cli::console::Console;
use transit_cli::logging;

fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());
    logging::init(config.log_file.as_deref())?;
    log::debug!("Starting with {:?}", config);

    let app = App::from_config(&config)?;
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let result = app.run(&mut console);
    if let Err(e) = &result {
        log::error!("{:#}", e);
    }
    result
}
