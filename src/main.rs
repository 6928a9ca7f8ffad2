//! Folio - content queries for a markdown blog and portfolio.

mod cli;
mod config;
mod content;
mod query;
mod utils;
mod views;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use content::FsProvider;
use query::ContentQuery;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let provider = FsProvider::new(&config.build.content);
    let query = ContentQuery::new(provider).with_default_avatar(&config.build.default_avatar);

    let view = views::render(&cli.command, &config, &query).await?;
    if view.is_null() && cli.is_lookup() {
        log!("warn"; "no entry matches {:?}", cli.command);
    }

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(std::path::Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        log!("config"; "loading `{}`", config_path.display());
        SiteConfig::from_path(&config_path)?
    } else {
        log!("config"; "`{}` not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
