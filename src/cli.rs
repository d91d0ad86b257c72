//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Blog entry pre-save transforms and SEO head metadata
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: blogmeta.toml)
    #[arg(short = 'C', long, default_value = "blogmeta.toml")]
    pub config: PathBuf,

    /// Override the site host.
    ///
    /// Useful for preview deployments where the public URL differs from production.
    ///
    /// Example: blogmeta --host "https://preview.example.com" head --path /
    #[arg(long)]
    pub host: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format of the `head` command
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadFormat {
    /// `<head>` markup fragment
    #[default]
    Html,
    /// Ordered tag list as JSON
    Json,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default config file
    Init,

    /// Apply pre-save transforms to a batch of JSON entries
    Transform {
        /// Entry JSON file (object or array). Reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Synthesize head metadata for a page
    Head {
        /// Request path as seen by the router, e.g. `/strona/2/`
        #[arg(long, default_value = "/")]
        path: String,

        /// Listing page number
        #[arg(long)]
        page: Option<u32>,

        /// Article permalink; marks the page as an article
        #[arg(long)]
        permalink: Option<String>,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Page description (site default when omitted)
        #[arg(long)]
        description: Option<String>,

        /// Article author profile
        #[arg(long)]
        author: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: HeadFormat,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init)
    }
    pub const fn is_transform(&self) -> bool {
        matches!(self.command, Commands::Transform { .. })
    }
    pub const fn is_head(&self) -> bool {
        matches!(self.command, Commands::Head { .. })
    }
}
