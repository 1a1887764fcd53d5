use azure_vnet_subnet_config::cli::{self, Cli};
use azure_vnet_subnet_config::config::Settings;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env();

    let log_config = cli.log_config.clone().unwrap_or_else(|| settings.log_config.clone());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Error initializing logging: {e}");
        std::process::exit(2);
    }
    log::info!("#Start main()");

    if let Err(e) = cli::run(cli, &settings) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// log4rs from `path`, or plain stderr logging at info if the file is missing.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l}):5} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    log::debug!("no log config at {}, using stderr", path.display());
    Ok(())
}
