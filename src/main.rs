//! blogmeta - pre-save entry transforms and SEO head metadata for a blog.

mod cli;
mod config;
mod entry;
mod head;
mod init;
mod logger;
mod presave;
mod seo;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use head::print_head;
use init::new_config;
use presave::run_transform;
use seo::{PageContent, RouteState};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Init => new_config(&config),
        Commands::Transform {
            input,
            output,
            pretty,
        } => run_transform(input.as_deref(), output.as_deref(), pretty),
        Commands::Head {
            path,
            page,
            permalink,
            title,
            description,
            author,
            format,
        } => {
            let route = RouteState {
                path,
                page_number: page,
                permalink,
            };
            let content = PageContent {
                title,
                description,
                author,
            };
            print_head(&route, &content, format, &config)
        }
    }
}

/// Load configuration and validate it unless a fresh one is being written.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli)?;
    if !cli.is_init() {
        config.validate()?;
    }
    Ok(config)
}
