use pardot_embed_domain::{CliOverrides, Config};
use tracing::{info, warn};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs the effective configuration; call once logging is initialized.
pub fn report_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        api_version = config.pardot.api_version,
        force_https = config.site.force_https,
        cache_backend = %config.cache.backend,
        cache_lifetime_secs = config.cache.lifetime_secs,
        "Configuration loaded"
    );

    if !config.pardot.has_credentials() {
        warn!("Pardot credentials incomplete; catalog refreshes will fail");
    }
}
