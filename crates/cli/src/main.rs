//! # Pardot Embed
//!
//! Resolves Pardot form and dynamic-content shortcodes into embed markup.

mod bootstrap;
mod di;

use bootstrap::{init_logging, load_config, report_config};
use clap::{ArgAction, Args, Parser, Subcommand};
use di::AppServices;
use pardot_embed_domain::config::CacheBackend;
use pardot_embed_domain::{CliOverrides, EntityKind};
use std::collections::HashMap;
use tracing::info;

#[derive(Parser)]
#[command(name = "pardot-embed")]
#[command(version)]
#[command(about = "Resolve Pardot shortcodes into embed markup")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Force embed URLs onto the secure host (true or false; overrides the file)
    #[arg(long, global = true, action = ArgAction::Set)]
    force_https: Option<bool>,

    /// Cache backend (memory or file)
    #[arg(long, global = true)]
    cache_backend: Option<CacheBackend>,

    /// Seconds the cache store retains a catalog
    #[arg(long, global = true)]
    cache_lifetime: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct DisplayArgs {
    #[arg(long)]
    height: Option<String>,

    #[arg(long)]
    width: Option<String>,

    /// Extra CSS classes
    #[arg(long)]
    classes: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Render a form by title
    Form {
        #[arg(long)]
        title: String,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Render a dynamic-content block by name
    DynamicContent {
        #[arg(long)]
        name: String,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Re-fetch a catalog from the API and replace the cached copy
    Refresh {
        /// form or dynamic-content
        kind: EntityKind,
    },

    /// List catalog entries by name
    List {
        /// form or dynamic-content
        kind: EntityKind,
    },
}

fn shortcode_arguments(identifier: (&str, String), display: DisplayArgs) -> HashMap<String, String> {
    let mut arguments = HashMap::new();
    arguments.insert(identifier.0.to_string(), identifier.1);
    for (key, value) in [
        ("height", display.height),
        ("width", display.width),
        ("classes", display.classes),
    ] {
        if let Some(value) = value {
            arguments.insert(key.to_string(), value);
        }
    }
    arguments
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        force_https: cli.force_https,
        cache_backend: cli.cache_backend,
        cache_lifetime_secs: cli.cache_lifetime,
        log_level: cli.log_level.clone(),
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);
    report_config(&config, cli.config.as_deref());

    let services = AppServices::new(&config)?;

    match cli.command {
        Command::Form { title, display } => {
            let arguments = shortcode_arguments(("title", title), display);
            println!("{}", services.shortcodes.pardot_form(&arguments).await);
        }
        Command::DynamicContent { name, display } => {
            let arguments = shortcode_arguments(("name", name), display);
            println!("{}", services.shortcodes.pardot_dynamic_content(&arguments).await);
        }
        Command::Refresh { kind } => {
            let entities = services.refresh.execute(kind).await?;
            info!(%kind, entities = entities.len(), "Refresh complete");
            println!("{} {} entries cached", entities.len(), kind);
        }
        Command::List { kind } => {
            let snapshot = services.catalog.execute(kind).await?;
            info!(%kind, cache_hit = snapshot.cache_hit, "Catalog listed");
            for entity in &snapshot.entities {
                println!("{}", entity.name);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_https_flag_can_disable() {
        let cli = Cli::try_parse_from(["pardot-embed", "--force-https", "false", "list", "form"])
            .unwrap();
        assert_eq!(cli.force_https, Some(false));

        let mut config = pardot_embed_domain::Config::default();
        config.site.force_https = true;
        config.apply_overrides(CliOverrides {
            force_https: cli.force_https,
            ..CliOverrides::default()
        });
        assert!(!config.site.force_https);
    }

    #[test]
    fn test_force_https_flag_absent_keeps_file_value() {
        let cli = Cli::try_parse_from(["pardot-embed", "list", "dynamic-content"]).unwrap();
        assert_eq!(cli.force_https, None);
    }

    #[test]
    fn test_force_https_flag_enables() {
        let cli = Cli::try_parse_from(["pardot-embed", "form", "--title", "x", "--force-https", "true"])
            .unwrap();
        assert_eq!(cli.force_https, Some(true));
    }
}
