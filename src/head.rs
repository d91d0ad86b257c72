//! `head` command: synthesize and print head metadata for one page.

use crate::{
    cli::HeadFormat,
    config::SiteConfig,
    log,
    seo::{PageContent, RouteState, render_head, synthesize},
};
use anyhow::Result;
use std::io::{self, Write};

/// Render the head of one page in the requested format.
pub fn render_page_head(
    route: &RouteState,
    content: &PageContent,
    format: HeadFormat,
    config: &SiteConfig,
) -> Result<String> {
    let tags = synthesize(route, content, config);
    log!(
        "head";
        "{}: {} tags for {}",
        tags.value("title").unwrap_or_default(),
        tags.len(),
        route.path
    );

    Ok(match format {
        HeadFormat::Html => render_head(&tags)?,
        HeadFormat::Json => serde_json::to_string_pretty(&tags)? + "\n",
    })
}

/// Print the head of one page to stdout.
pub fn print_head(
    route: &RouteState,
    content: &PageContent,
    format: HeadFormat,
    config: &SiteConfig,
) -> Result<()> {
    let output = render_page_head(route, content, format, config)?;
    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
