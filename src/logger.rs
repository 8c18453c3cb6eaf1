use std::env;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const DEFAULT_CONFIG_FILE: &str = "log4rs.yaml";
const CONFIG_FILE_VARIABLE: &str = "RGBA_CHANNEL_MERGE_LOG_CONFIG";
const FALLBACK_PATTERN: &str = "{h({l})} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    let config_file =
        env::var(CONFIG_FILE_VARIABLE).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_owned());
    if log4rs::init_file(&config_file, Default::default()).is_ok() {
        return;
    }
    if let Err(e) = init_fallback() {
        eprintln!("Unable to initialise logging: {}", e);
    }
}

/// warnings and errors on stderr, used when no config file is found
fn init_fallback() -> Result<(), Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
