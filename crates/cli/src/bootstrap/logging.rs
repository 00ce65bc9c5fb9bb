use pardot_embed_domain::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only rendered markup.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
}
